//! `RecordStore` trait implementation for `SqliteRecordStore`.

use async_trait::async_trait;
use rusqlite::{params, Batch};
use tracing::debug;

use shelf_store::{RecordStore, SeedReport, StoreError};
use shelf_types::stats::round_average_age;
use shelf_types::{DatabaseStats, NewUser, Product, QueryRows, ReadOnlyQuery, User};

use crate::migrations::{create_tables, reset_database};
use crate::repository::{map_sqlite_err, now_timestamp, SqliteRecordStore};
use crate::row_mapping::{
    row_to_product, row_to_user, value_to_string, PRODUCT_COLS, USER_COLS,
};
use crate::seed::{count_rows, seed_data};

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn create_tables(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        create_tables(&conn)
    }

    async fn reset(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        reset_database(&conn)
    }

    async fn seed(&self) -> Result<SeedReport, StoreError> {
        let mut conn = self.connect()?;
        seed_data(&mut conn)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let conn = self.connect()?;
        let sql = format!("SELECT {USER_COLS} FROM users ORDER BY id ASC");
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let users = stmt
            .query_map([], row_to_user)
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(users)
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let conn = self.connect()?;
        let sql = format!("SELECT {PRODUCT_COLS} FROM products ORDER BY id ASC");
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let products = stmt
            .query_map([], row_to_product)
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(products)
    }

    async fn add_user(&self, user: &NewUser) -> Result<i64, StoreError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO users (name, email, age, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![user.name, user.email, user.age, now_timestamp()],
        )
        .map_err(|e| {
            if let rusqlite::Error::SqliteFailure(ref err, _) = e {
                if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE {
                    return StoreError::DuplicateEmail {
                        email: user.email.clone(),
                    };
                }
            }
            map_sqlite_err(e)
        })?;
        let id = conn.last_insert_rowid();
        debug!(id, email = %user.email, "user inserted");
        Ok(id)
    }

    async fn search_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, StoreError> {
        let conn = self.connect()?;
        let sql = format!(
            "SELECT {PRODUCT_COLS} FROM products WHERE category = ?1 COLLATE NOCASE ORDER BY id ASC"
        );
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let products = stmt
            .query_map(params![category], row_to_product)
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(products)
    }

    async fn database_stats(&self) -> Result<DatabaseStats, StoreError> {
        let conn = self.connect()?;
        let total_users = count_rows(&conn, "users")?;
        let total_products = count_rows(&conn, "products")?;
        let products_in_stock: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM products WHERE in_stock = 1",
                [],
                |row| row.get(0),
            )
            .map_err(map_sqlite_err)?;
        let avg_age: Option<f64> = conn
            .query_row(
                "SELECT AVG(age) FROM users WHERE age IS NOT NULL",
                [],
                |row| row.get(0),
            )
            .map_err(map_sqlite_err)?;

        Ok(DatabaseStats {
            total_users,
            total_products,
            products_in_stock,
            average_age: round_average_age(avg_age),
            database_path: self.path().display().to_string(),
        })
    }

    async fn execute_read_only(&self, query: &ReadOnlyQuery) -> Result<QueryRows, StoreError> {
        let conn = self.connect_read_only()?;
        debug!(%query, "executing read-only query");
        let mut batch = Batch::new(&conn, query.as_str());
        let mut stmt = batch
            .next()
            .map_err(map_sqlite_err)?
            .ok_or_else(|| StoreError::Storage {
                message: "query contains no statement".to_string(),
            })?;
        if batch.next().map_err(map_sqlite_err)?.is_some() {
            return Err(StoreError::Storage {
                message: "You can only execute one statement at a time.".to_string(),
            });
        }
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();
        let rows = stmt
            .query_map([], |row| {
                (0..width)
                    .map(|i| row.get_ref(i).map(value_to_string))
                    .collect::<rusqlite::Result<Vec<String>>>()
            })
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(QueryRows { columns, rows })
    }
}
