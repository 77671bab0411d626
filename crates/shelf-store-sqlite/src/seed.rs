//! Fixed sample data for bootstrapping an empty database.

use rusqlite::{params, Connection};
use tracing::info;

use shelf_store::{SeedReport, StoreError, TableSeed};
use shelf_types::{NewProduct, NewUser};

use crate::repository::{map_sqlite_err, now_timestamp};

/// The five sample users.
pub fn sample_users() -> Vec<NewUser> {
    vec![
        NewUser::new("Alice Johnson", "alice@example.com", Some(28)),
        NewUser::new("Bob Smith", "bob@example.com", Some(34)),
        NewUser::new("Carol Davis", "carol@example.com", Some(22)),
        NewUser::new("David Wilson", "david@example.com", Some(31)),
        NewUser::new("Emma Brown", "emma@example.com", Some(26)),
    ]
}

/// The seven sample products.
pub fn sample_products() -> Vec<NewProduct> {
    vec![
        NewProduct::new("Laptop", 999.99, "Electronics", true),
        NewProduct::new("Coffee Mug", 12.50, "Kitchen", true),
        NewProduct::new("Notebook", 5.99, "Office", true),
        NewProduct::new("Wireless Mouse", 29.99, "Electronics", false),
        NewProduct::new("Desk Lamp", 45.00, "Office", true),
        NewProduct::new("Smartphone", 599.99, "Electronics", true),
        NewProduct::new("Water Bottle", 18.75, "Kitchen", true),
    ]
}

/// Inserts the sample rows into each table that is currently empty.
///
/// Tables that already hold rows are left untouched; nothing is matched
/// or deduplicated by content.
pub fn seed_data(conn: &mut Connection) -> Result<SeedReport, StoreError> {
    let tx = conn.transaction().map_err(map_sqlite_err)?;

    let user_count = count_rows(&tx, "users")?;
    let users = if user_count == 0 {
        let created_at = now_timestamp();
        let rows = sample_users();
        {
            let mut stmt = tx
                .prepare("INSERT INTO users (name, email, age, created_at) VALUES (?1, ?2, ?3, ?4)")
                .map_err(map_sqlite_err)?;
            for u in &rows {
                stmt.execute(params![u.name, u.email, u.age, created_at])
                    .map_err(map_sqlite_err)?;
            }
        }
        info!(rows = rows.len(), "seeded users");
        TableSeed::Inserted(rows.len())
    } else {
        info!(existing = user_count, "users table not empty, skipping");
        TableSeed::Skipped(user_count)
    };

    let product_count = count_rows(&tx, "products")?;
    let products = if product_count == 0 {
        let rows = sample_products();
        {
            let mut stmt = tx
                .prepare("INSERT INTO products (name, price, category, in_stock) VALUES (?1, ?2, ?3, ?4)")
                .map_err(map_sqlite_err)?;
            for p in &rows {
                stmt.execute(params![p.name, p.price, p.category, p.in_stock])
                    .map_err(map_sqlite_err)?;
            }
        }
        info!(rows = rows.len(), "seeded products");
        TableSeed::Inserted(rows.len())
    } else {
        info!(existing = product_count, "products table not empty, skipping");
        TableSeed::Skipped(product_count)
    };

    tx.commit().map_err(map_sqlite_err)?;
    Ok(SeedReport { users, products })
}

/// Counts the rows of one of the two known tables.
pub(crate) fn count_rows(conn: &Connection, table: &str) -> Result<i64, StoreError> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .map_err(map_sqlite_err)
}
