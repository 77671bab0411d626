//! MCP dispatch tests: handshake, routing and protocol errors.

use std::sync::Arc;

use serde_json::{json, Value};

use shelf_mcp::McpHandler;
use shelf_protocol::mcp::methods;
use shelf_protocol::{JsonRpcNotification, JsonRpcRequest, RequestId};
use shelf_store::RecordStore;
use shelf_store_sqlite::SqliteRecordStore;

async fn make_handler(dir: &tempfile::TempDir) -> McpHandler {
    let store = SqliteRecordStore::new(dir.path().join("demo.db"));
    store.create_tables().await.expect("create tables");
    store.seed().await.expect("seed");
    McpHandler::new(Arc::new(store))
}

fn rpc(method: &str, id: i64, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: RequestId::Number(id),
        method: method.into(),
        params,
    }
}

async fn dispatch_json(handler: &McpHandler, req: &JsonRpcRequest) -> Value {
    let output = handler.dispatch(req).await;
    let json_str = output.to_json().expect("ser");
    serde_json::from_str(&json_str).expect("de")
}

#[tokio::test]
async fn initialize_reports_server_info() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(&dir).await;
    let req = rpc(
        methods::INITIALIZE,
        1,
        Some(json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "test-client", "version": "0.0.1"}
        })),
    );
    let parsed = dispatch_json(&handler, &req).await;
    assert_eq!(parsed["id"], 1);
    assert_eq!(parsed["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(parsed["result"]["serverInfo"]["name"], "shelf");
    assert!(parsed["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn initialize_without_params_still_succeeds() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(&dir).await;
    let parsed = dispatch_json(&handler, &rpc(methods::INITIALIZE, 2, None)).await;
    assert!(parsed["result"].is_object());
}

#[tokio::test]
async fn initialize_with_bad_params_is_invalid_params() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(&dir).await;
    let req = rpc(methods::INITIALIZE, 3, Some(json!({"protocolVersion": 7})));
    let parsed = dispatch_json(&handler, &req).await;
    assert_eq!(parsed["error"]["code"], -32602);
}

#[tokio::test]
async fn ping_returns_empty_object() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(&dir).await;
    let parsed = dispatch_json(&handler, &rpc(methods::PING, 4, None)).await;
    assert_eq!(parsed["result"], json!({}));
}

#[tokio::test]
async fn tools_list_has_six_tools() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(&dir).await;
    let parsed = dispatch_json(&handler, &rpc(methods::TOOLS_LIST, 5, None)).await;
    let tools = parsed["result"]["tools"].as_array().expect("tools");
    assert_eq!(tools.len(), 6);
    for tool in tools {
        assert_eq!(tool["inputSchema"]["type"], "object");
        assert!(tool["description"].as_str().is_some());
    }
}

#[tokio::test]
async fn unknown_method_is_method_not_found() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(&dir).await;
    let parsed = dispatch_json(&handler, &rpc("resources/list", 6, None)).await;
    assert_eq!(parsed["id"], 6);
    assert_eq!(parsed["error"]["code"], -32601);
    assert!(parsed["error"]["message"]
        .as_str()
        .expect("msg")
        .contains("unknown method"));
}

#[tokio::test]
async fn tools_call_missing_params_returns_error() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(&dir).await;
    let parsed = dispatch_json(&handler, &rpc(methods::TOOLS_CALL, 7, None)).await;
    assert_eq!(parsed["error"]["code"], -32602);
}

#[tokio::test]
async fn tools_call_non_object_params_returns_error() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(&dir).await;
    let req = rpc(methods::TOOLS_CALL, 8, Some(json!("not an object")));
    let parsed = dispatch_json(&handler, &req).await;
    assert!(parsed["error"]["message"].as_str().is_some());
}

#[tokio::test]
async fn tools_call_unknown_tool_returns_error() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(&dir).await;
    let req = rpc(
        methods::TOOLS_CALL,
        9,
        Some(json!({"name": "drop_tables", "arguments": {}})),
    );
    let parsed = dispatch_json(&handler, &req).await;
    assert_eq!(parsed["error"]["code"], -32602);
    assert!(parsed["error"]["message"]
        .as_str()
        .expect("msg")
        .contains("unknown tool: drop_tables"));
}

#[tokio::test]
async fn tools_call_bad_arguments_returns_error() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(&dir).await;
    let req = rpc(
        methods::TOOLS_CALL,
        10,
        Some(json!({"name": "add_user", "arguments": {"name": "X"}})),
    );
    let parsed = dispatch_json(&handler, &req).await;
    assert_eq!(parsed["error"]["code"], -32602);
}

#[tokio::test]
async fn notifications_are_accepted_silently() {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(&dir).await;
    handler.handle_notification(&JsonRpcNotification {
        jsonrpc: "2.0".into(),
        method: methods::NOTIFICATIONS_INITIALIZED.into(),
        params: None,
    });
    handler.handle_notification(&JsonRpcNotification {
        jsonrpc: "2.0".into(),
        method: "notifications/cancelled".into(),
        params: Some(json!({"requestId": 1})),
    });
}
