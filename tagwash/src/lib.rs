// tagwash/src/lib.rs
//! # TagWash CLI Application
//!
//! This crate provides the command-line interface for the TagWash content
//! pipeline: it reads editor-authored HTML from a file or stdin and emits
//! cleaned markup, a plain-text excerpt, or a full JSON report.

pub mod cli;
pub mod commands;
pub mod logger;
