//! Text rendering of store results.
//!
//! Every function here is pure and deterministic; the output is what a
//! tool call returns to the client verbatim.

use std::fmt::Write;

use shelf_types::{format_real, DatabaseStats, Product, QueryRows, User};

/// Renders the full user list.
pub fn users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found in the database.".to_string();
    }
    let mut out = String::from("Users in database:\n");
    for u in users {
        let age = u.age.map_or_else(|| "None".to_string(), |a| a.to_string());
        let _ = writeln!(
            out,
            "ID: {}, Name: {}, Email: {}, Age: {}, Created: {}",
            u.id, u.name, u.email, age, u.created_at
        );
    }
    out
}

/// Renders the full product list.
pub fn products(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found in the database.".to_string();
    }
    let mut out = String::from("Products in database:\n");
    for p in products {
        let _ = writeln!(
            out,
            "ID: {}, Name: {}, Price: {}, Category: {}, Status: {}",
            p.id,
            p.name,
            price(p.price),
            p.category,
            p.stock_status()
        );
    }
    out
}

/// Renders the products matching one category. The category is echoed as given.
pub fn products_in_category(category: &str, products: &[Product]) -> String {
    if products.is_empty() {
        return format!("No products found in category '{category}'.");
    }
    let mut out = format!("Products in category '{category}':\n");
    for p in products {
        let _ = writeln!(
            out,
            "ID: {}, Name: {}, Price: {}, Status: {}",
            p.id,
            p.name,
            price(p.price),
            p.stock_status()
        );
    }
    out
}

/// Confirmation for a successful insert.
pub fn user_added(name: &str, id: i64) -> String {
    format!("User '{name}' added successfully with ID: {id}")
}

/// Renders the statistics block.
pub fn stats(stats: &DatabaseStats) -> String {
    format!(
        "Database Statistics:\n\
         - Total Users: {}\n\
         - Total Products: {}\n\
         - Products In Stock: {}\n\
         - Average User Age: {} years\n\
         - Database File: {}",
        stats.total_users,
        stats.total_products,
        stats.products_in_stock,
        average_age(stats.average_age),
        stats.database_path
    )
}

/// Renders ad-hoc query output as a pipe-delimited table.
pub fn query_rows(rows: &QueryRows) -> String {
    if rows.is_empty() {
        return "Query executed successfully but returned no results.".to_string();
    }
    let header = rows.columns.join(" | ");
    let mut out = format!("Query Results ({} rows):\n", rows.rows.len());
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", "-".repeat(header.chars().count()));
    for row in &rows.rows {
        let _ = writeln!(out, "{}", row.join(" | "));
    }
    out
}

/// The email is already taken.
pub fn duplicate_email(email: &str) -> String {
    format!("Error: Email '{email}' already exists in the database.")
}

/// The ad-hoc query was not a SELECT.
pub fn policy_violation() -> String {
    "Error: Only SELECT queries are allowed for safety reasons.".to_string()
}

/// Any other insert failure.
pub fn add_user_failed(message: &str) -> String {
    format!("Error adding user: {message}")
}

/// The ad-hoc query failed inside SQLite.
pub fn query_failed(message: &str) -> String {
    format!("Error executing query: {message}")
}

/// Failure of a listing or stats tool.
pub fn tool_failed(message: &str) -> String {
    format!("Error: {message}")
}

fn price(value: f64) -> String {
    format!("${}", format_real(value))
}

/// A zero average means no user has an age and prints as a bare `0`.
fn average_age(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format_real(value)
    }
}
