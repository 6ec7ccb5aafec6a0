//! Data structures describing the output of the content pipeline.
//!
//! A [`ProcessedContent`] is a value derived entirely from its input; it
//! has no identity or lifecycle of its own and is recomputed whenever the
//! input or options change.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

/// Length bookkeeping for a processing run. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContentMetrics {
    /// Characters in the raw input.
    pub original_length: usize,
    /// Characters in the cleaned markup.
    pub cleaned_length: usize,
    /// Characters in the (possibly truncated) plain-text view.
    pub plain_text_length: usize,
}

/// The two derived views of a piece of editor content, plus flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedContent {
    /// Sanitized markup, safe to render.
    pub cleaned_html: String,
    /// De-tagged, entity-decoded, whitespace-collapsed text, optionally
    /// truncated with a trailing ellipsis marker.
    pub plain_text: String,
    /// True iff the cleaned markup is empty or whitespace-only.
    pub is_empty: bool,
    /// True iff the cleaned markup differs from the plain-text view.
    pub has_formatting: bool,
    /// Length bookkeeping.
    pub metrics: ContentMetrics,
}

impl ProcessedContent {
    /// The short-circuit value for missing or empty input.
    pub fn empty() -> Self {
        Self {
            cleaned_html: String::new(),
            plain_text: String::new(),
            is_empty: true,
            has_formatting: false,
            metrics: ContentMetrics::default(),
        }
    }
}
