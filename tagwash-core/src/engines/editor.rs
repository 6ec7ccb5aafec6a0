// tagwash-core/src/engines/editor.rs
//! A `ContentEngine` for HTML authored in a rich-text (WYSIWYG) editor.
//!
//! Runs the rewrite-rule table, the allow-list pass, and the plain-text
//! derivation, in that order. The rewrite stage assumes nothing about the
//! input; the allow-list stage assumes the rewrite stage ran first.
//!
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;

use crate::compiler::{shared_rules, CompiledRules};
use crate::config::{validate_options, ProcessOptions};
use crate::content::{ContentMetrics, ProcessedContent};
use crate::engine::ContentEngine;
use crate::sanitize::allowlist_clean;
use crate::text::{extract_plain_text, truncate_plain};

/// The standard pipeline over editor-authored HTML.
#[derive(Debug)]
pub struct EditorHtmlEngine {
    rules: Arc<CompiledRules>,
    options: ProcessOptions,
}

impl EditorHtmlEngine {
    /// Creates an engine with the default options.
    pub fn new() -> Result<Self> {
        Self::with_options(ProcessOptions::default())
    }

    /// Creates an engine with the given options, validating them first.
    pub fn with_options(mut options: ProcessOptions) -> Result<Self> {
        validate_options(&options)?;
        options.normalize();
        let rules = shared_rules().context("Failed to compile rewrite rules for EditorHtmlEngine")?;
        Ok(Self { rules, options })
    }
}

impl ContentEngine for EditorHtmlEngine {
    fn process(&self, raw: &str) -> Result<ProcessedContent> {
        if raw.is_empty() {
            return Ok(ProcessedContent::empty());
        }

        let rewritten = self.rules.apply_all(raw);
        let cleaned_html = allowlist_clean(&rewritten, &self.options)
            .trim()
            .to_string();
        let full_plain = extract_plain_text(&cleaned_html);
        let is_empty = cleaned_html.is_empty();
        let has_formatting = !is_empty && cleaned_html != full_plain;
        let plain_text = match self.options.max_length {
            Some(limit) => truncate_plain(&full_plain, limit),
            None => full_plain,
        };

        let metrics = ContentMetrics {
            original_length: raw.chars().count(),
            cleaned_length: cleaned_html.chars().count(),
            plain_text_length: plain_text.chars().count(),
        };
        debug!(
            "Processed content: original {} chars, cleaned {} chars, plain {} chars.",
            metrics.original_length, metrics.cleaned_length, metrics.plain_text_length
        );

        Ok(ProcessedContent {
            cleaned_html,
            plain_text,
            is_empty,
            has_formatting,
            metrics,
        })
    }

    fn plain_text(&self, raw: &str) -> Result<String> {
        Ok(self.process(raw)?.plain_text)
    }

    fn style_token(&self) -> &'static str {
        self.options.text_style.style_token()
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.rules
    }

    fn options(&self) -> &ProcessOptions {
        &self.options
    }
}
