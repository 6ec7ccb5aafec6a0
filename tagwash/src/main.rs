// tagwash/src/main.rs
//! TagWash entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the selected
//! command.

use anyhow::Result;
use clap::Parser;

use tagwash::cli::{Cli, Commands};
use tagwash::commands::process;
use tagwash::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match &args.command {
        Commands::Clean(cmd) => process::run_clean(cmd),
        Commands::Text(cmd) => process::run_text(cmd),
    }
}
