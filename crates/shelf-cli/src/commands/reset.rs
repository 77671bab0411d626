//! `shelf reset` command.
//!
//! Drops both tables and recreates them empty. All rows are lost.

use shelf_config::ShelfConfig;
use shelf_store::RecordStore;
use shelf_types::ShelfError;

use crate::output;
use crate::shared::{self, DbArgs};

/// Drops and recreates the tables.
pub async fn execute(args: &DbArgs, config: &ShelfConfig) -> anyhow::Result<()> {
    let store = shared::open_store(config, args)?;
    store.reset().await.map_err(ShelfError::from)?;
    output::print_message("Database tables dropped");
    output::print_message("Database tables created successfully!");
    Ok(())
}
