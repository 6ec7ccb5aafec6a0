// tagwash-core/src/lib.rs
//! # TagWash Core Library
//!
//! `tagwash-core` provides the fundamental, platform-independent logic for
//! turning untrusted, editor-authored HTML into markup that is safe to
//! render and text that is safe anywhere. It defines the ordered rewrite
//! rules that scrub editor artifacts, the allow-list sanitization pass,
//! and the plain-text derivation with its truncation policy.
//!
//! The library is designed to be pure and stateless, focusing solely on
//! the transformation of input data based on the configured options,
//! without concerns for I/O or application-specific state management.
//!
//! ## Modules
//!
//! * `config`: Defines `ProcessOptions` and the tag allow/forbid constants.
//! * `rules`: The ordered, named rewrite-rule table applied before sanitization.
//! * `compiler`: Compiles and caches the rule table for efficient application.
//! * `sanitize`: The ammonia-backed allow-list pass.
//! * `text`: Plain-text derivation and the excerpt truncation policy.
//! * `styles`: Maps semantic content roles to presentation style tokens.
//! * `content`: Defines the derived `ProcessedContent` value.
//! * `engine`: Defines the `ContentEngine` trait, enabling a modular design.
//! * `engines`: Contains concrete implementations of the `ContentEngine` trait.
//! * `headless`: Convenience wrappers for one-shot, non-interactive use.
//!
//! ## Public API
//!
//! **Configuration**
//!
//! * [`ProcessOptions`]: The options value driving a processing run.
//! * [`ProcessOptions::load_from_file`]: Loads options from a JSON file.
//! * [`validate_options`]: Rejects forbidden or malformed allow-list entries.
//!
//! **Processing**
//!
//! * [`ContentEngine`]: A trait for pluggable processing pipelines.
//! * [`EditorHtmlEngine`]: The concrete implementation for editor HTML.
//! * [`process_html`] / [`plain_excerpt`]: One-shot convenience functions.
//!
//! **Results**
//!
//! * [`ProcessedContent`]: Cleaned markup, plain text, and derived flags.
//! * [`TextStyle`]: Semantic role resolving to a presentation style token.
//!
//! ## Usage Example
//!
//! ```rust
//! use tagwash_core::{process_html, ProcessOptions};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let raw = r#"<div style="color:red" class="intro">Hello <span>World</span></div>"#;
//!
//!     let processed = process_html(raw, ProcessOptions::default())?;
//!
//!     assert_eq!(processed.cleaned_html, "<p>Hello World</p>");
//!     assert_eq!(processed.plain_text, "Hello World");
//!     assert!(!processed.is_empty);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` at fallible boundaries (option loading
//! and validation, rule compilation) and defines the structured
//! [`TagwashError`] type for programmatic handling. Content itself never
//! errors: empty input short-circuits, malformed markup is handled
//! best-effort by the sanitizer's parser, and unknown style names fall
//! back to the paragraph mapping.
//!
//! ## Design Principles
//!
//! * **Pluggable Architecture:** The `ContentEngine` trait allows the
//!   pipeline to be swapped out behind a stable seam.
//! * **Stateless:** Output is a pure function of `(input, options)`; the
//!   only process-wide state is the once-compiled rule table.
//! * **Ordered, named rules:** Every rewrite is an independently testable
//!   rule; application order is explicit and documented.
//! * **Degrade, don't fail:** Rendering-path code must be total over
//!   string input.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod config;
pub mod content;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod rules;
pub mod sanitize;
pub mod styles;
pub mod text;

/// Re-exports the public configuration types and constants.
pub use config::{validate_options, ProcessOptions, DEFAULT_ALLOWED_TAGS, FORBIDDEN_TAGS};

/// Re-exports the custom error type for clear error reporting.
pub use errors::TagwashError;

/// Re-exports types related to the core content engine trait.
pub use engine::ContentEngine;

/// Re-exports the concrete `EditorHtmlEngine` implementation.
pub use engines::editor::EditorHtmlEngine;

/// Re-exports the derived content value and its metrics.
pub use content::{ContentMetrics, ProcessedContent};

/// Re-exports the style role enum and its token resolver.
pub use styles::TextStyle;

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{plain_excerpt, process_html};

/// Re-exports the rule table and compiler for advanced usage.
pub use compiler::{compile_rules, shared_rules, CompiledRule, CompiledRules};
pub use rules::{builtin_rule, builtin_rules, RewriteRule, MAX_PATTERN_LENGTH};

/// Re-exports the standalone pipeline stages.
pub use sanitize::allowlist_clean;
pub use text::{extract_plain_text, truncate_plain};
