// tagwash/src/cli.rs
//! This file defines the command-line interface (CLI) for the tagwash
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "tagwash",
    author = "TagWash Maintainers",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scrub editor-authored HTML into clean markup or plain text",
    long_about = "Tagwash is a command-line utility for cleaning HTML produced by rich-text (WYSIWYG) editors. It strips editor artifacts, word-processor paste residue, and unsafe markup, keeping only an allow-listed set of formatting tags, and can derive a plain-text excerpt suitable for previews and meta descriptions.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'tagwash' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `tagwash` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes an input file or stdin and prints the cleaned markup.
    #[command(about = "Sanitizes an input file or stdin and prints the cleaned markup.")]
    Clean(CleanCommand),

    /// Derives the plain-text view of an input file or stdin.
    #[command(about = "Derives the plain-text view of an input file or stdin.")]
    Text(TextCommand),
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a processing options file (JSON).
    #[arg(long = "options", value_name = "FILE", help = "Path to a processing options file (JSON).")]
    pub options_file: Option<PathBuf>,

    /// Strip all markup instead of keeping the formatting allow-list.
    #[arg(long = "no-formatting", help = "Strip all markup instead of keeping the formatting allow-list.")]
    pub no_formatting: bool,

    /// Override the tag allow-list (comma-separated).
    #[arg(long = "allow", short = 'a', value_delimiter = ',', help = "Override the tag allow-list (comma-separated).")]
    pub allow: Vec<String>,

    /// Semantic text style: paragraph, quote, heading, or plain.
    #[arg(long = "style", value_name = "NAME", help = "Semantic text style (paragraph, quote, heading, plain). Unknown names fall back to paragraph.")]
    pub style: Option<String>,

    /// Truncate the plain-text view to N characters.
    #[arg(long = "max-length", value_name = "N", help = "Truncate the plain-text view to N characters.")]
    pub max_length: Option<usize>,

    /// Emit the full processing report as JSON instead of bare markup.
    #[arg(long = "json", help = "Emit the full processing report (markup, text, flags, metrics, style token) as JSON.")]
    pub json: bool,
}

/// Arguments for the `text` command.
#[derive(Parser, Debug)]
pub struct TextCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a processing options file (JSON).
    #[arg(long = "options", value_name = "FILE", help = "Path to a processing options file (JSON).")]
    pub options_file: Option<PathBuf>,

    /// Truncate the output to N characters.
    #[arg(long = "max-length", short = 'm', value_name = "N", help = "Truncate the output to N characters.")]
    pub max_length: Option<usize>,
}
