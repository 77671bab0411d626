//! Abstract store trait (port) for user and product records.

use async_trait::async_trait;
use thiserror::Error;

use shelf_types::{
    DatabaseStats, ErrorKind, NewUser, Product, QueryRows, ReadOnlyQuery, ShelfError, User,
};

use crate::seed::SeedReport;

/// Errors returned by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email is already taken by another user.
    #[error("email already exists: {email}")]
    DuplicateEmail { email: String },
    /// The statement was refused before reaching the database.
    #[error("policy violation: {message}")]
    PolicyViolation { message: String },
    /// A database or I/O error occurred.
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl From<ShelfError> for StoreError {
    fn from(e: ShelfError) -> Self {
        match e.kind {
            ErrorKind::PolicyViolation => StoreError::PolicyViolation { message: e.message },
            _ => StoreError::Storage {
                message: e.to_string(),
            },
        }
    }
}

impl From<StoreError> for ShelfError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail { email } => {
                ShelfError::new(ErrorKind::Conflict, "email already exists").with_context(email)
            }
            StoreError::PolicyViolation { message } => ShelfError::policy_violation(message),
            StoreError::Storage { message } => ShelfError::new(ErrorKind::Internal, message),
        }
    }
}

/// Abstract trait for user/product persistence.
///
/// Implementations live in adapter crates (e.g., `shelf-store-sqlite`).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates both tables if they do not exist yet.
    async fn create_tables(&self) -> Result<(), StoreError>;

    /// Drops both tables and recreates them empty.
    async fn reset(&self) -> Result<(), StoreError>;

    /// Inserts the sample rows into whichever tables are empty.
    async fn seed(&self) -> Result<SeedReport, StoreError>;

    /// Lists every user in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Lists every product in insertion order.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Inserts a user and returns its new id.
    async fn add_user(&self, user: &NewUser) -> Result<i64, StoreError>;

    /// Finds products whose category matches, ignoring case.
    async fn search_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, StoreError>;

    /// Computes the aggregate figures over both tables.
    async fn database_stats(&self) -> Result<DatabaseStats, StoreError>;

    /// Runs a vetted read-only query verbatim.
    async fn execute_read_only(&self, query: &ReadOnlyQuery) -> Result<QueryRows, StoreError>;
}
