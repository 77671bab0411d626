//! `shelf serve` command.
//!
//! Starts the MCP server over stdio, exposing the six database tools
//! via JSON-RPC 2.0.

use clap::Args;

use shelf_config::ShelfConfig;
use shelf_transport_stdio::{McpHandler, McpServer, StdioTransport};
use shelf_types::ShelfError;

use crate::shared::{self, DbArgs};

/// Start the MCP server on stdin/stdout.
#[derive(Debug, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &ShelfConfig) -> anyhow::Result<()> {
    let store = shared::open_store(config, &args.db)?;
    let path = store.path().display().to_string();
    let handler = McpHandler::new(store);
    let mut server = McpServer::new(StdioTransport::stdio(), handler);
    tracing::info!(database = %path, "shelf MCP server ready on stdio");

    tokio::select! {
        result = server.run() => {
            let summary = result.map_err(ShelfError::from)?;
            tracing::debug!(?summary, "session finished");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
