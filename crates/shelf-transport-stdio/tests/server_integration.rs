//! Integration tests for the MCP stdio server loop.

use std::sync::Arc;

use serde_json::Value;

use shelf_store::RecordStore;
use shelf_store_sqlite::SqliteRecordStore;
use shelf_transport_stdio::{McpHandler, McpServer, SessionSummary, StdioTransport};

async fn make_handler(dir: &tempfile::TempDir) -> McpHandler {
    let store = SqliteRecordStore::new(dir.path().join("demo.db"));
    store.create_tables().await.expect("create tables");
    store.seed().await.expect("seed");
    McpHandler::new(Arc::new(store))
}

async fn run_session(input: &str) -> (Vec<Value>, SessionSummary) {
    run_session_bytes(input.as_bytes()).await
}

async fn run_session_bytes(input: &[u8]) -> (Vec<Value>, SessionSummary) {
    let dir = tempfile::tempdir().expect("tmp");
    let handler = make_handler(&dir).await;
    let reader = tokio::io::BufReader::new(input);
    let mut output = Vec::new();
    let transport = StdioTransport::new(reader, &mut output);
    let mut server = McpServer::new(transport, handler);
    let summary = server.run().await.expect("run");
    drop(server);
    let replies = String::from_utf8(output)
        .expect("utf8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("reply is json"))
        .collect();
    (replies, summary)
}

#[tokio::test]
async fn server_handles_valid_request() {
    let (replies, summary) =
        run_session("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"initialize\"}\n").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["jsonrpc"], "2.0");
    assert_eq!(replies[0]["id"], 1);
    assert_eq!(summary.requests, 1);
}

#[tokio::test]
async fn server_handles_notification_silently() {
    let (replies, summary) =
        run_session("{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n").await;
    assert!(replies.is_empty(), "notifications must not produce output");
    assert_eq!(summary.notifications, 1);
}

#[tokio::test]
async fn server_returns_parse_error_with_null_id() {
    let (replies, summary) = run_session("not json at all\n").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["error"]["code"], -32700);
    assert!(replies[0]["id"].is_null());
    assert!(replies[0]["error"]["message"]
        .as_str()
        .expect("msg")
        .contains("parse error"));
    assert_eq!(summary.rejected, 1);
}

#[tokio::test]
async fn server_keeps_going_after_parse_error() {
    let input = "{broken\n{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n";
    let (replies, _) = run_session(input).await;
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[1]["id"], 2);
    assert!(replies[1]["result"].is_object());
}

#[tokio::test]
async fn server_survives_invalid_utf8_line() {
    let mut input = b"\xff\xfe garbage\n".to_vec();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"ping\"}\n");
    let (replies, summary) = run_session_bytes(&input).await;
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["error"]["code"], -32700);
    assert!(replies[0]["id"].is_null());
    assert_eq!(replies[1]["id"], 3);
    assert!(replies[1]["result"].is_object());
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.requests, 1);
}

#[tokio::test]
async fn null_id_gets_invalid_request_reply() {
    let (replies, summary) =
        run_session("{\"jsonrpc\":\"2.0\",\"id\":null,\"method\":\"ping\"}\n").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["error"]["code"], -32600);
    assert!(replies[0]["id"].is_null());
    assert_eq!(summary.notifications, 0);
    assert_eq!(summary.rejected, 1);
}

#[tokio::test]
async fn missing_method_gets_invalid_request_reply() {
    let (replies, _) = run_session("{\"jsonrpc\":\"2.0\",\"id\":9}\n").await;
    assert_eq!(replies[0]["error"]["code"], -32600);
    assert_eq!(replies[0]["id"], 9);
}

#[tokio::test]
async fn server_handles_empty_lines() {
    let (replies, _) =
        run_session("\n\n{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"initialize\"}\n").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], 2);
}

#[tokio::test]
async fn server_eof_shuts_down_cleanly() {
    let (replies, summary) = run_session("").await;
    assert!(replies.is_empty());
    assert_eq!(summary, SessionSummary::default());
}

#[tokio::test]
async fn full_session_over_the_wire() {
    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"t","version":"1"}}}"#,
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        r#"{"jsonrpc":"2.0","id":"call-1","method":"tools/call","params":{"name":"get_database_stats","arguments":{}}}"#,
        r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"execute_custom_query","arguments":{"query":"UPDATE users SET age = 0"}}}"#,
    ]
    .join("\n");
    let (replies, summary) = run_session(&input).await;

    assert_eq!(replies.len(), 4);
    assert_eq!(summary.requests, 4);
    assert_eq!(summary.notifications, 1);

    assert_eq!(replies[1]["result"]["tools"].as_array().expect("tools").len(), 6);

    assert_eq!(replies[2]["id"], "call-1");
    let stats = replies[2]["result"]["content"][0]["text"].as_str().expect("text");
    assert!(stats.contains("- Total Users: 5"));
    assert_eq!(replies[2]["result"]["isError"], false);

    assert_eq!(replies[3]["result"]["isError"], true);
    assert_eq!(
        replies[3]["result"]["content"][0]["text"],
        "Error: Only SELECT queries are allowed for safety reasons."
    );
}
