//! # shelf-store
//!
//! Port definitions (abstract traits) for the record store.
//! Adapter crates implement these traits.

pub mod repository;
pub mod seed;

pub use repository::{RecordStore, StoreError};
pub use seed::{SeedReport, TableSeed};
