//! Handles the `tools/list` MCP method.

use shelf_protocol::mcp::tools::{McpToolDefinition, ToolsListResult};
use shelf_protocol::schema::build_input_schema;
use shelf_protocol::RequestId;

use super::success;
use crate::catalog::ToolName;
use crate::handler::JsonRpcOutput;

/// Describes every tool in the catalog.
pub(crate) fn tool_definitions() -> Vec<McpToolDefinition> {
    ToolName::ALL
        .into_iter()
        .map(|tool| McpToolDefinition {
            name: tool.as_str().to_string(),
            description: Some(tool.description().to_string()),
            input_schema: build_input_schema(tool.arguments()),
        })
        .collect()
}

/// Handles the `tools/list` request.
pub(crate) fn handle_tools_list(id: RequestId) -> JsonRpcOutput {
    success(
        id,
        ToolsListResult {
            tools: tool_definitions(),
            next_cursor: None,
        },
    )
}
