//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::config::OutputFormat;
use crate::core::report::Query;

const AFTER_HELP: &str = "\
EXAMPLES:
  code-spans < message.txt               All spans in a message read from stdin
  code-spans blocks message.txt          Fenced and brace blocks only
  code-spans inline --format json -      Inline code as JSON, from stdin
  code-spans completions zsh             Generate zsh completions

ENVIRONMENT:
  CODE_SPANS_FORMAT   Default output format (text or json)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Find code blocks and inline code in chat message text",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (overrides CODE_SPANS_FORMAT)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Where to read the message from.
#[derive(clap::Args, Default)]
pub struct InputArgs {
    /// Message file to scan ('-' or omitted reads stdin)
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Every span: fenced blocks, brace blocks, then inline code (default)
    All(InputArgs),
    /// Block spans: fenced blocks followed by brace blocks
    Blocks(InputArgs),
    /// Fenced ``` blocks only
    Fenced(InputArgs),
    /// Brace-delimited blocks only
    Brace(InputArgs),
    /// Inline `code` spans only
    Inline(InputArgs),
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// The span query to run and its input file. `None` for `completions`.
    pub fn query(&self) -> Option<(Query, Option<&Path>)> {
        let (query, input) = match &self.command {
            None => return Some((Query::All, None)),
            Some(Commands::All(input)) => (Query::All, input),
            Some(Commands::Blocks(input)) => (Query::Blocks, input),
            Some(Commands::Fenced(input)) => (Query::Fenced, input),
            Some(Commands::Brace(input)) => (Query::Brace, input),
            Some(Commands::Inline(input)) => (Query::Inline, input),
            Some(Commands::Completions { .. }) => return None,
        };
        let file = input.file.as_deref().filter(|p| *p != Path::new("-"));
        Some((query, file))
    }
}
