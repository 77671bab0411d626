//! MCP request handler: routes JSON-RPC methods to dispatch functions.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use shelf_protocol::mcp::{methods, ToolsCallResult};
use shelf_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
};
use shelf_store::RecordStore;

use crate::catalog::{ToolCall, ToolCallError};
use crate::dispatch::{initialize, tools_call, tools_list};

/// Either a success or an error reply to a JSON-RPC request.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    Success(JsonRpcResponse),
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes the reply to a single JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            JsonRpcOutput::Success(r) => serde_json::to_string(r),
            JsonRpcOutput::Error(e) => serde_json::to_string(e),
        }
    }
}

/// Routes MCP requests to the record store.
///
/// Holds no per-session state; every tool call goes straight to the store.
pub struct McpHandler {
    store: Arc<dyn RecordStore>,
}

impl McpHandler {
    /// Creates a handler backed by the given store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Handles one request and produces its reply.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        match request.method.as_str() {
            methods::INITIALIZE => initialize::handle_initialize(id, &request.params),
            methods::PING => JsonRpcOutput::Success(JsonRpcResponse::success(
                id,
                Value::Object(Default::default()),
            )),
            methods::TOOLS_LIST => tools_list::handle_tools_list(id),
            methods::TOOLS_CALL => {
                tools_call::handle_tools_call(id, &request.params, self.store.as_ref()).await
            }
            other => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("unknown method: {other}"),
            )),
        }
    }

    /// Handles a notification. Notifications never get a reply.
    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        match notification.method.as_str() {
            methods::NOTIFICATIONS_INITIALIZED => debug!("client initialized"),
            other => debug!(method = %other, "ignoring notification"),
        }
    }

    /// Runs one tool directly, bypassing JSON-RPC framing.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolsCallResult, ToolCallError> {
        let call = ToolCall::parse(name, arguments)?;
        Ok(tools_call::run_tool(call, self.store.as_ref()).await)
    }
}
