//! Handles the `initialize` MCP method.

use serde_json::Value;

use shelf_protocol::mcp::initialize::{
    Implementation, InitializeParams, InitializeResult, ServerCapabilities, ToolCapability,
    PROTOCOL_VERSION,
};
use shelf_protocol::RequestId;

use super::{invalid_params, success};
use crate::handler::JsonRpcOutput;

/// Handles the `initialize` request and returns the server capabilities.
pub(crate) fn handle_initialize(id: RequestId, params: &Option<Value>) -> JsonRpcOutput {
    if let Some(p) = params {
        match serde_json::from_value::<InitializeParams>(p.clone()) {
            Ok(init) => tracing::info!(
                client = %init.client_info.name,
                client_version = %init.client_info.version,
                protocol = %init.protocol_version,
                "client connected"
            ),
            Err(e) => return invalid_params(id, format!("invalid initialize params: {e}")),
        }
    }

    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolCapability::default()),
        },
        server_info: Implementation {
            name: "shelf".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };
    success(id, result)
}
