//! Application run modes: logger init, span query, shell completions.

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{self, Args};
use crate::core;
use crate::core::config::OutputFormat;
use crate::core::report::{self, Query};

/// Initialize env_logger on stderr so stdout stays machine-readable.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

/// Read the message, run the query, print the report to stdout.
pub fn run_query(
    query: Query,
    file: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = core::input::read_message(file)?;
    let records = report::collect(query, &text);
    log::info!("{:?}: {} span(s)", query, records.len());
    let out = report::render(&records, &text, format)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Print a completion script for `shell` to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Args::command();
    cli::generate(shell, &mut cmd, core::app::NAME, &mut io::stdout());
}
