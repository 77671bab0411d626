//! Outcome of a seeding pass.

use serde::{Deserialize, Serialize};

/// What happened to a single table during seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "rows")]
pub enum TableSeed {
    /// The table was empty and this many sample rows were inserted.
    Inserted(usize),
    /// The table already held this many rows and was left alone.
    Skipped(i64),
}

/// Per-table seeding outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    pub users: TableSeed,
    pub products: TableSeed,
}

impl SeedReport {
    /// Returns true if neither table received rows.
    pub fn is_noop(&self) -> bool {
        matches!(self.users, TableSeed::Skipped(_)) && matches!(self.products, TableSeed::Skipped(_))
    }
}
