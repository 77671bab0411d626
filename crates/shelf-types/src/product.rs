//! Product records.

use serde::{Deserialize, Serialize};

/// A stored product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Auto-incremented row id.
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Matched case-insensitively by category searches.
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Human-readable stock label.
    pub fn stock_status(&self) -> &'static str {
        if self.in_stock {
            "In Stock"
        } else {
            "Out of Stock"
        }
    }
}

/// Fields supplied when inserting a product (used by the seeder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl NewProduct {
    /// Creates a new product payload.
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>, in_stock: bool) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
            in_stock,
        }
    }
}
