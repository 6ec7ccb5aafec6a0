// tagwash/src/logger.rs
//! Logger bootstrap for the tagwash CLI.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes env_logger, honoring an explicit level override.
///
/// With no override, the level comes from `RUST_LOG` (default `warn`).
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
