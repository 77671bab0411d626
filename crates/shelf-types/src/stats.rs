//! Aggregate figures over both tables.

use serde::{Deserialize, Serialize};

/// Snapshot of the database aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseStats {
    pub total_users: i64,
    pub total_products: i64,
    pub products_in_stock: i64,
    /// Mean of the non-null ages, rounded to one decimal; `0.0` if there are none.
    pub average_age: f64,
    pub database_path: String,
}

/// Rounds a raw `AVG(age)` result to one decimal, ties to even.
pub fn round_average_age(avg: Option<f64>) -> f64 {
    match avg {
        Some(v) => (v * 10.0).round_ties_even() / 10.0,
        None => 0.0,
    }
}
