//! Reading the message text from a file or stdin.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors when reading the input message.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {}: {source}", .path.display())]
    File { path: PathBuf, source: io::Error },
    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Read the whole message from `path`, or from stdin when `path` is `None`.
/// The text must be valid UTF-8.
pub fn read_message(path: Option<&Path>) -> Result<String, InputError> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.to_path_buf(),
            source,
        })?,
        None => io::read_to_string(io::stdin()).map_err(InputError::Stdin)?,
    };
    log::info!("read {} characters", text.chars().count());
    Ok(text)
}
