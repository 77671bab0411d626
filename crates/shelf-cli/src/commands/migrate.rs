//! `shelf migrate` command.

use shelf_config::ShelfConfig;
use shelf_store::RecordStore;
use shelf_types::ShelfError;

use crate::output;
use crate::shared::{self, DbArgs};

/// Creates the tables if they do not exist.
pub async fn execute(args: &DbArgs, config: &ShelfConfig) -> anyhow::Result<()> {
    let store = shared::open_store(config, args)?;
    store.create_tables().await.map_err(ShelfError::from)?;
    output::print_message("Database tables created successfully!");
    Ok(())
}
