// tagwash-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot processing without holding an engine.
//! Useful for callers that process a single field and move on, such as
//! template helpers deriving an excerpt for a preview card.

use anyhow::Result;

use crate::config::ProcessOptions;
use crate::content::ProcessedContent;
use crate::engine::ContentEngine;
use crate::engines::editor::EditorHtmlEngine;

/// Fully processes a raw HTML string in a single call.
///
/// # Arguments
///
/// * `raw` - The untrusted editor HTML to process.
/// * `options` - The processing options (defaults via `ProcessOptions::default()`).
pub fn process_html(raw: &str, options: ProcessOptions) -> Result<ProcessedContent> {
    let engine = EditorHtmlEngine::with_options(options)?;
    engine.process(raw)
}

/// Derives a truncated plain-text excerpt from raw editor HTML.
///
/// Equivalent to `process_html` with `max_length` set, returning only the
/// plain-text view.
pub fn plain_excerpt(raw: &str, max_length: usize) -> Result<String> {
    let options = ProcessOptions {
        max_length: Some(max_length),
        ..ProcessOptions::default()
    };
    let engine = EditorHtmlEngine::with_options(options)?;
    engine.plain_text(raw)
}
