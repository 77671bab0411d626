//! Shared helpers used across CLI commands.
//!
//! Centralises resolving the database path and opening the SQLite
//! store so every command agrees on where the data lives.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;

use shelf_config::ShelfConfig;
use shelf_store_sqlite::SqliteRecordStore;

/// Database selection shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct DbArgs {
    /// Database file path (overrides the configured location).
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Picks the `--db` flag when given, else the configured path.
pub fn resolve_db_path(config: &ShelfConfig, db: Option<&Path>) -> PathBuf {
    db.map_or_else(|| config.database.path(), Path::to_path_buf)
}

/// Opens the SQLite store, creating its parent directory if needed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created.
pub fn open_store(config: &ShelfConfig, args: &DbArgs) -> anyhow::Result<Arc<SqliteRecordStore>> {
    let path = resolve_db_path(config, args.db.as_deref());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    }
    tracing::debug!(path = %path.display(), "using database");
    Ok(Arc::new(SqliteRecordStore::new(path)))
}
