//! User records.

use serde::{Deserialize, Serialize};

/// A stored user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Auto-incremented row id.
    pub id: i64,
    pub name: String,
    /// Unique across the table.
    pub email: String,
    pub age: Option<i64>,
    /// ISO-8601 timestamp assigned at insert time.
    pub created_at: String,
}

/// Fields supplied by the caller when creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i64>,
}

impl NewUser {
    /// Creates a new user payload.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: Option<i64>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}
