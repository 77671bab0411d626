//! `shelf call` command.
//!
//! Runs a single tool through the same dispatcher the MCP server uses
//! and prints the text it returns.

use clap::Args;

use shelf_config::ShelfConfig;
use shelf_mcp::McpHandler;
use shelf_protocol::mcp::tools::ToolsCallResult;

use crate::shared::{self, DbArgs};
use crate::{input, output};

/// Invoke one tool by name.
#[derive(Debug, Args)]
pub struct CallArgs {
    /// Tool name (e.g. list_users, add_user).
    pub tool: String,
    /// JSON arguments object.
    #[arg(short, long, default_value = "{}")]
    pub args: String,
    /// Read JSON arguments from a file (use "-" for stdin).
    #[arg(short = 'f', long)]
    pub args_file: Option<String>,
    #[command(flatten)]
    pub db: DbArgs,
}

/// Executes the call command.
pub async fn execute(args: &CallArgs, config: &ShelfConfig) -> anyhow::Result<()> {
    let arguments = input::resolve_arguments(&args.args, args.args_file.as_deref())?;
    let store = shared::open_store(config, &args.db)?;
    let handler = McpHandler::new(store);

    tracing::info!(tool = %args.tool, %arguments, "calling tool");
    let result = handler
        .call_tool(&args.tool, arguments)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    report(&args.tool, &result)
}

/// Prints the tool output. A result flagged as an error fails the command.
fn report(tool: &str, result: &ToolsCallResult) -> anyhow::Result<()> {
    let text = result.joined_text();
    if result.is_error {
        output::print_error(&text);
        anyhow::bail!("tool {tool} reported an error");
    }
    output::print_message(text.trim_end());
    Ok(())
}
