//! Configuration management for `tagwash-core`.
//!
//! This module defines the options value that drives the content pipeline.
//! It handles serialization/deserialization of JSON option files and
//! provides utilities for loading, validating, and normalizing them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::styles::TextStyle;

/// Tags that survive the allow-list pass when formatting is preserved.
pub const DEFAULT_ALLOWED_TAGS: [&str; 7] = ["p", "br", "strong", "em", "i", "b", "u"];

/// Elements whose markup and enclosed content are always discarded.
pub const FORBIDDEN_TAGS: [&str; 7] = [
    "script", "style", "iframe", "object", "embed", "form", "input",
];

/// Options controlling a single processing run.
///
/// All fields are defaulted, so an empty JSON object (or
/// `ProcessOptions::default()`) yields the standard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessOptions {
    /// Keep the allow-listed formatting tags, or strip all markup.
    pub preserve_formatting: bool,
    /// The tag allow-list applied when formatting is preserved.
    pub allowed_tags: Vec<String>,
    /// Truncation bound (in characters) for the derived plain-text view.
    pub max_length: Option<usize>,
    /// Semantic role used to select the presentation style token.
    pub text_style: TextStyle,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            preserve_formatting: true,
            allowed_tags: DEFAULT_ALLOWED_TAGS.iter().map(|t| t.to_string()).collect(),
            max_length: None,
            text_style: TextStyle::Paragraph,
        }
    }
}

impl ProcessOptions {
    /// Loads processing options from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading processing options from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        let options: ProcessOptions = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse options file {}", path.display()))?;

        validate_options(&options)?;
        debug!(
            "Loaded options: {} allowed tags, preserve_formatting={}.",
            options.allowed_tags.len(),
            options.preserve_formatting
        );
        Ok(options)
    }

    /// Drops duplicate allow-list entries, warning about each one.
    ///
    /// Order of first occurrence is preserved.
    pub fn normalize(&mut self) {
        let mut seen: HashSet<String> = HashSet::new();
        self.allowed_tags.retain(|tag| {
            let fresh = seen.insert(tag.clone());
            if !fresh {
                warn!("Duplicate tag '{}' in allow-list; ignoring.", tag);
            }
            fresh
        });
    }
}

/// Validates an options value, collecting every problem into one report.
pub fn validate_options(options: &ProcessOptions) -> Result<()> {
    let mut errors = Vec::new();

    for tag in &options.allowed_tags {
        if tag.is_empty() {
            errors.push("Allow-list contains an empty tag name.".to_string());
            continue;
        }
        if !tag.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
            errors.push(format!(
                "Allow-list tag '{}' is not a lowercase ASCII tag name.",
                tag
            ));
        }
        if FORBIDDEN_TAGS.contains(&tag.as_str()) {
            errors.push(format!(
                "Tag '{}' is forbidden and cannot be allow-listed.",
                tag
            ));
        }
    }

    if options.max_length == Some(0) {
        errors.push("max_length must be a positive integer.".to_string());
    }

    if !errors.is_empty() {
        let full_error_message = format!("Options validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ProcessOptions::default();
        assert!(options.preserve_formatting);
        assert_eq!(options.allowed_tags, ["p", "br", "strong", "em", "i", "b", "u"]);
        assert_eq!(options.max_length, None);
        assert_eq!(options.text_style, TextStyle::Paragraph);
        assert!(validate_options(&options).is_ok());
    }

    #[test]
    fn test_forbidden_tag_rejected() {
        let options = ProcessOptions {
            allowed_tags: vec!["p".to_string(), "script".to_string()],
            ..ProcessOptions::default()
        };
        let err = validate_options(&options).unwrap_err().to_string();
        assert!(err.contains("forbidden"));
    }

    #[test]
    fn test_zero_max_length_rejected() {
        let options = ProcessOptions {
            max_length: Some(0),
            ..ProcessOptions::default()
        };
        assert!(validate_options(&options).is_err());
    }

    #[test]
    fn test_uppercase_tag_rejected() {
        let options = ProcessOptions {
            allowed_tags: vec!["P".to_string()],
            ..ProcessOptions::default()
        };
        assert!(validate_options(&options).is_err());
    }

    #[test]
    fn test_normalize_drops_duplicates_in_order() {
        let mut options = ProcessOptions {
            allowed_tags: vec!["p".to_string(), "b".to_string(), "p".to_string()],
            ..ProcessOptions::default()
        };
        options.normalize();
        assert_eq!(options.allowed_tags, ["p", "b"]);
    }

    #[test]
    fn test_empty_json_object_yields_defaults() {
        let options: ProcessOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ProcessOptions::default());
    }
}
