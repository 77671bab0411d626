//! `shelf setup` command: migrate, then seed.

use shelf_config::ShelfConfig;

use crate::shared::DbArgs;

/// Runs `migrate` followed by `seed` against the same database.
pub async fn execute(args: &DbArgs, config: &ShelfConfig) -> anyhow::Result<()> {
    super::migrate::execute(args, config).await?;
    super::seed::execute(args, config).await
}
