//! # shelf-types
//!
//! Domain types for the shelf demo database.
//! This crate contains pure data types with zero external dependencies
//! (except serde for serialization).

pub mod error;
pub mod number;
pub mod product;
pub mod query;
pub mod stats;
pub mod user;

// Re-exports for convenience.
pub use error::{ErrorKind, ShelfError};
pub use number::format_real;
pub use product::{NewProduct, Product};
pub use query::{QueryRows, ReadOnlyQuery};
pub use stats::DatabaseStats;
pub use user::{NewUser, User};
