//! Handles the `tools/call` MCP method.

use serde_json::Value;
use tracing::{debug, warn};

use shelf_protocol::mcp::tools::{ToolsCallParams, ToolsCallResult};
use shelf_protocol::RequestId;
use shelf_store::{RecordStore, StoreError};
use shelf_types::ReadOnlyQuery;

use super::{invalid_params, success};
use crate::catalog::{ToolCall, ToolName};
use crate::format;
use crate::handler::JsonRpcOutput;

/// Handles the `tools/call` request.
///
/// Malformed params and unknown tools are protocol errors. Anything that
/// goes wrong once the tool runs is reported as text with `isError` set.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    store: &dyn RecordStore,
) -> JsonRpcOutput {
    // 1. Parse params
    let call_params = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => return invalid_params(id, format!("invalid tools/call params: {e}")),
        },
        None => return invalid_params(id, "tools/call requires params"),
    };

    // 2. Resolve tool and typed arguments
    let call = match ToolCall::parse(&call_params.name, call_params.arguments) {
        Ok(c) => c,
        Err(e) => return invalid_params(id, e.to_string()),
    };

    // 3. Run against the store
    success(id, run_tool(call, store).await)
}

/// Executes a resolved call and renders the outcome.
pub(crate) async fn run_tool(call: ToolCall, store: &dyn RecordStore) -> ToolsCallResult {
    let tool = call.tool();
    debug!(%tool, "executing tool");

    let outcome = match call {
        ToolCall::ListUsers => store.list_users().await.map(|u| format::users(&u)),
        ToolCall::ListProducts => store.list_products().await.map(|p| format::products(&p)),
        ToolCall::AddUser(user) => store
            .add_user(&user)
            .await
            .map(|id| format::user_added(&user.name, id)),
        ToolCall::SearchProductsByCategory { category } => store
            .search_products_by_category(&category)
            .await
            .map(|p| format::products_in_category(&category, &p)),
        ToolCall::GetDatabaseStats => store.database_stats().await.map(|s| format::stats(&s)),
        ToolCall::ExecuteCustomQuery { query } => match ReadOnlyQuery::new(query) {
            Ok(q) => store
                .execute_read_only(&q)
                .await
                .map(|rows| format::query_rows(&rows)),
            Err(e) => Err(StoreError::from(e)),
        },
    };

    match outcome {
        Ok(text) => ToolsCallResult::text(text),
        Err(e) => {
            warn!(%tool, error = %e, "tool failed");
            ToolsCallResult::error_text(render_error(tool, &e))
        }
    }
}

/// Turns a store error into the text returned to the client.
fn render_error(tool: ToolName, error: &StoreError) -> String {
    match (tool, error) {
        (_, StoreError::DuplicateEmail { email }) => format::duplicate_email(email),
        (_, StoreError::PolicyViolation { .. }) => format::policy_violation(),
        (ToolName::AddUser, StoreError::Storage { message }) => format::add_user_failed(message),
        (ToolName::ExecuteCustomQuery, StoreError::Storage { message }) => {
            format::query_failed(message)
        }
        (_, StoreError::Storage { message }) => format::tool_failed(message),
    }
}
