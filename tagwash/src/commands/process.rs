// tagwash/src/commands/process.rs
//! Clean and text command implementations.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use tagwash_core::{ContentEngine, EditorHtmlEngine, ProcessOptions, ProcessedContent, TextStyle};

use crate::cli::{CleanCommand, TextCommand};

/// The JSON report emitted by `clean --json`.
#[derive(Serialize)]
struct ContentReport {
    style_token: &'static str,
    #[serde(flatten)]
    content: ProcessedContent,
}

/// Reads the raw input from a file, or stdin when no path is given.
fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Writes `content` to a file, or stdout when no path is given.
fn write_output(path: Option<&PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            info!("Writing output to file: {}", path.display());
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", content)?;
        }
    }
    Ok(())
}

/// Builds processing options from an optional JSON file plus flag overrides.
fn build_clean_options(cmd: &CleanCommand) -> Result<ProcessOptions> {
    let mut options = match &cmd.options_file {
        Some(path) => ProcessOptions::load_from_file(path)?,
        None => ProcessOptions::default(),
    };
    if cmd.no_formatting {
        options.preserve_formatting = false;
    }
    if !cmd.allow.is_empty() {
        options.allowed_tags = cmd.allow.clone();
    }
    if let Some(style) = &cmd.style {
        options.text_style = TextStyle::from_name(style);
    }
    if cmd.max_length.is_some() {
        options.max_length = cmd.max_length;
    }
    Ok(options)
}

/// Runs the `clean` command.
pub fn run_clean(cmd: &CleanCommand) -> Result<()> {
    info!("Starting clean operation.");
    let raw = read_input(cmd.input_file.as_ref())?;
    let options = build_clean_options(cmd)?;

    let engine = EditorHtmlEngine::with_options(options)?;
    let processed = engine.process(&raw).context("Content processing failed")?;

    debug!(
        "Content processed. Original length: {}, cleaned length: {}.",
        raw.len(),
        processed.cleaned_html.len()
    );

    if cmd.json {
        let report = ContentReport {
            style_token: engine.style_token(),
            content: processed,
        };
        let rendered = serde_json::to_string_pretty(&report)
            .context("Failed to serialize the processing report")?;
        write_output(cmd.output.as_ref(), &rendered)?;
    } else {
        write_output(cmd.output.as_ref(), &processed.cleaned_html)?;
    }

    info!("Clean operation completed.");
    Ok(())
}

/// Runs the `text` command.
pub fn run_text(cmd: &TextCommand) -> Result<()> {
    info!("Starting text operation.");
    let raw = read_input(cmd.input_file.as_ref())?;
    let mut options = match &cmd.options_file {
        Some(path) => ProcessOptions::load_from_file(path)?,
        None => ProcessOptions::default(),
    };
    if cmd.max_length.is_some() {
        options.max_length = cmd.max_length;
    }

    let engine = EditorHtmlEngine::with_options(options)?;
    let plain = engine.plain_text(&raw).context("Content processing failed")?;
    write_output(cmd.output.as_ref(), &plain)?;

    info!("Text operation completed.");
    Ok(())
}
