//! # code-spans
//!
//! Command-line front end for the code span detector: reads a chat message from a file or
//! stdin and prints where its fenced blocks, brace blocks and inline code are.

mod cli;
mod core;
mod run;

use clap::Parser;

use cli::{Args, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = &args.command {
        run::print_completions(*shell);
        return Ok(());
    }

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let format = args.format.unwrap_or(config.format);

    if let Some((query, file)) = args.query()
        && let Err(e) = run::run_query(query, file, format)
    {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
