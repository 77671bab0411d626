//! Configuration schema types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level shelf configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShelfConfig {
    /// Database location.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the SQLite file lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Directory holding the database file.
    #[serde(default = "default_db_dir")]
    pub dir: String,
    /// File name inside `dir`.
    #[serde(default = "default_db_file")]
    pub file: String,
}

impl DatabaseConfig {
    /// Full path of the database file.
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.file)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dir: default_db_dir(),
            file: default_db_file(),
        }
    }
}

fn default_db_dir() -> String {
    ".".to_string()
}
fn default_db_file() -> String {
    "demo.db".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "shelf_mcp=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
