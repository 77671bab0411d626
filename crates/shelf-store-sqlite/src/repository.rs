//! SQLite-backed record store.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use shelf_store::StoreError;

/// SQLite-backed record store.
///
/// Holds only the database path. Every operation opens its own
/// connection and drops it before returning, so nothing is shared
/// between calls.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    path: PathBuf,
}

impl SqliteRecordStore {
    /// Creates a store for the database file at `path`.
    ///
    /// The file is not touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a read-write connection, creating the file if needed.
    pub(crate) fn connect(&self) -> Result<Connection, StoreError> {
        Connection::open(&self.path).map_err(map_sqlite_err)
    }

    /// Opens a connection that SQLite itself refuses to write through.
    pub(crate) fn connect_read_only(&self) -> Result<Connection, StoreError> {
        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(map_sqlite_err)
    }
}

/// Maps a `rusqlite::Error` to a `StoreError::Storage`.
pub(crate) fn map_sqlite_err(e: rusqlite::Error) -> StoreError {
    StoreError::Storage {
        message: e.to_string(),
    }
}

/// Local wall-clock time in ISO-8601 form, e.g. `2024-05-01T09:30:12.345678`.
pub(crate) fn now_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_iso8601() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 26);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
    }

    #[test]
    fn path_is_kept_verbatim() {
        let store = SqliteRecordStore::new("data/demo.db");
        assert_eq!(store.path(), Path::new("data/demo.db"));
    }
}
