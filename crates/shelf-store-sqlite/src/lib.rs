//! # shelf-store-sqlite
//!
//! SQLite adapter for the shelf record store.
//! Implements `RecordStore` on top of a single database file, opening
//! a fresh connection for every operation.

pub mod migrations;
pub mod repository;
mod repository_impl;
mod row_mapping;
pub mod seed;

pub use repository::SqliteRecordStore;
