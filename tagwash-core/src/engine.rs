// tagwash-core/src/engine.rs
//! Defines the core ContentEngine trait.
//!
//! The `ContentEngine` trait provides a pluggable interface between option
//! handling and the concrete processing pipeline. This module defines the
//! contract that all such engines must adhere to, ensuring a consistent
//! and interchangeable core API for `tagwash`.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use crate::compiler::CompiledRules;
use crate::config::ProcessOptions;
use crate::content::ProcessedContent;

/// A trait that defines the core functionality of a content engine.
///
/// This trait decouples callers from the specific implementation of the
/// pipeline, allowing different engines to be used interchangeably.
pub trait ContentEngine: Send + Sync {
    /// Runs the full pipeline over the provided raw markup.
    ///
    /// Returns both derived views (cleaned markup and plain text) together
    /// with the emptiness/formatting flags and length metrics. Empty input
    /// short-circuits to the empty result; content itself never produces
    /// an error.
    fn process(&self, raw: &str) -> Result<ProcessedContent>;

    /// Returns only the plain-text view, truncated per the engine options.
    ///
    /// This is used by callers that render excerpts or previews and have
    /// no use for the markup view.
    fn plain_text(&self, raw: &str) -> Result<String>;

    /// The presentation style token for the configured text style.
    fn style_token(&self) -> &'static str;

    /// Returns a reference to the compiled rule table backing the engine.
    ///
    /// This is used by external components, such as diagnostics, to
    /// inspect the rules without recompiling them.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns a reference to the engine's options.
    fn options(&self) -> &ProcessOptions;
}
