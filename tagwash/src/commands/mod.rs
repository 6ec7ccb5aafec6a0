// tagwash/src/commands/mod.rs
//! Command implementations for the tagwash CLI.

pub mod process;
