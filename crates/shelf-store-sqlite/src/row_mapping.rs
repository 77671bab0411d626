//! Row-to-domain mapping for the SQLite record store.

use rusqlite::types::ValueRef;

use shelf_types::{format_real, Product, User};

/// Column list for user SELECTs, in `row_to_user` order.
pub(crate) const USER_COLS: &str = "id, name, email, age, created_at";

/// Column list for product SELECTs, in `row_to_product` order.
pub(crate) const PRODUCT_COLS: &str = "id, name, price, category, in_stock";

/// Maps a SQLite row to a `User`.
pub(crate) fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        age: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Maps a SQLite row to a `Product`.
///
/// `in_stock` has only a DEFAULT, not NOT NULL; a NULL is read as false.
pub(crate) fn row_to_product(row: &rusqlite::Row<'_>) -> rusqlite::Result<Product> {
    let in_stock: Option<bool> = row.get(4)?;
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        category: row.get(3)?,
        in_stock: in_stock.unwrap_or(false),
    })
}

/// Renders an arbitrary column value for ad-hoc query output.
pub(crate) fn value_to_string(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "None".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => format_real(f),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<blob {} bytes>", b.len()),
    }
}
