//! Schema management for the users and products tables.
//!
//! There is no version tracking: every statement is `IF NOT EXISTS` /
//! `IF EXISTS`, so each function can be run any number of times.

use rusqlite::Connection;
use tracing::info;

use shelf_store::StoreError;

/// Creates both tables if they are missing.
pub fn create_tables(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            email      TEXT UNIQUE NOT NULL,
            age        INTEGER,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS products (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            name     TEXT NOT NULL,
            price    REAL NOT NULL,
            category TEXT NOT NULL,
            in_stock INTEGER DEFAULT 1
        );",
    )
    .map_err(|e| StoreError::Storage {
        message: format!("create tables failed: {e}"),
    })?;
    info!("database tables created");
    Ok(())
}

/// Drops both tables, discarding every row.
pub fn drop_tables(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "DROP TABLE IF EXISTS users;
         DROP TABLE IF EXISTS products;",
    )
    .map_err(|e| StoreError::Storage {
        message: format!("drop tables failed: {e}"),
    })?;
    info!("database tables dropped");
    Ok(())
}

/// Drops and recreates both tables.
pub fn reset_database(conn: &Connection) -> Result<(), StoreError> {
    drop_tables(conn)?;
    create_tables(conn)
}
