//! # shelf-mcp
//!
//! MCP method dispatch handler (APPLICATION layer).
//!
//! Provides `McpHandler` and `JsonRpcOutput` for routing JSON-RPC requests
//! to the record store, plus the tool catalog and the text formatter that
//! turns store results into tool output.

pub mod catalog;
mod dispatch;
pub mod format;
pub mod handler;

pub use catalog::{ToolCall, ToolCallError, ToolName};
pub use handler::{JsonRpcOutput, McpHandler};
