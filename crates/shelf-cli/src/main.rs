//! shelf CLI - demo SQLite database served over MCP.

use clap::{Parser, Subcommand};

mod commands;
mod input;
mod output;
pub(crate) mod shared;

/// shelf - a tiny users/products database exposed as MCP tools.
#[derive(Debug, Parser)]
#[command(name = "shelf", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create tables.
    Migrate(shared::DbArgs),
    /// Insert sample data into empty tables.
    Seed(shared::DbArgs),
    /// Drop and recreate tables.
    Reset(shared::DbArgs),
    /// Run migrate + seed.
    Setup(shared::DbArgs),
    /// Start the MCP server over stdio.
    Serve(commands::serve::ServeArgs),
    /// Invoke one tool and print its output.
    Call(commands::call::CallArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = shelf_config::load_config(cli.config.as_deref())?;

    // Logs go to stderr; stdout carries JSON-RPC under `serve`.
    let filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    };

    tracing::debug!(config_file = ?cli.config, ?config, "shelf starting");

    match &cli.command {
        Commands::Migrate(args) => commands::migrate::execute(args, &config).await,
        Commands::Seed(args) => commands::seed::execute(args, &config).await,
        Commands::Reset(args) => commands::reset::execute(args, &config).await,
        Commands::Setup(args) => commands::setup::execute(args, &config).await,
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::Call(args) => commands::call::execute(args, &config).await,
    }
}
