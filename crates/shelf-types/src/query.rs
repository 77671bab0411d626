//! Read-only query gate and tabular query results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ShelfError;

/// The only statement keyword accepted by [`ReadOnlyQuery`].
const READ_KEYWORD: &str = "SELECT";

/// A query string that passed the read-only policy check.
///
/// The check looks at the leading keyword only, after trimming whitespace,
/// compared case-insensitively. The query text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadOnlyQuery(String);

impl ReadOnlyQuery {
    /// Creates a new `ReadOnlyQuery`, rejecting anything that is not a SELECT.
    pub fn new(query: impl Into<String>) -> Result<Self, ShelfError> {
        let query = query.into();
        let head = query.trim_start();
        let starts_with_select = head
            .get(..READ_KEYWORD.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(READ_KEYWORD));
        if !starts_with_select {
            return Err(ShelfError::policy_violation(
                "only SELECT queries are allowed",
            ));
        }
        Ok(Self(query))
    }

    /// Returns the query text as submitted.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReadOnlyQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Column names plus stringified rows from an ad-hoc query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRows {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl QueryRows {
    /// Returns true if the query produced no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
