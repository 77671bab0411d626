//! `shelf seed` command.

use shelf_config::ShelfConfig;
use shelf_store::RecordStore;
use shelf_types::ShelfError;

use crate::output;
use crate::shared::{self, DbArgs};

/// Inserts the sample rows into whichever tables are empty.
pub async fn execute(args: &DbArgs, config: &ShelfConfig) -> anyhow::Result<()> {
    let store = shared::open_store(config, args)?;
    let report = store.seed().await.map_err(ShelfError::from)?;
    for line in output::seed_report_lines(&report) {
        output::print_message(&line);
    }
    Ok(())
}
