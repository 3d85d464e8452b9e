//! # Application Configuration
//!
//! Defaults for the console, kept in one place.
//!
//! The program takes no flags and reads no configuration files: the
//! database is always `inventario.db` in the working directory.

use std::path::PathBuf;

/// File name of the inventory database, relative to the working directory.
pub const DEFAULT_DATABASE_FILE: &str = "inventario.db";

/// Log filter used when `RUST_LOG` is not set.
///
/// Kept at `warn` so log lines don't interleave with the menu: operator
/// mistakes log at `debug`, storage failures at `error`.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Console application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// SQLite database file.
    pub database_path: PathBuf,

    /// Fallback `tracing` filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
