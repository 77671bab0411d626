//! JSON-RPC 2.0 types for MCP transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Protocol version string carried by every message.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request ID.
    pub id: RequestId,
    /// Method name.
    pub method: String,
    /// Optional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    /// Request ID (matches the request).
    pub id: RequestId,
    pub result: Value,
}

/// JSON-RPC 2.0 error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    pub jsonrpc: String,
    /// Request ID, or `null` when the request could not be read at all.
    pub id: Option<RequestId>,
    pub error: JsonRpcError,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Request ID can be a number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    String(String),
}

/// JSON-RPC 2.0 notification (no id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// A single inbound line, classified.
///
/// Requests carry an `id` and expect a reply; notifications do not.
#[derive(Debug, Clone)]
pub enum IncomingMessage {
    Request(JsonRpcRequest),
    Notification(JsonRpcNotification),
}

/// Why an inbound line could not be turned into a message.
#[derive(Debug, Error)]
pub enum MessageError {
    /// The line is not JSON at all.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Valid JSON, but not a JSON-RPC request or notification.
    #[error("invalid request: {reason}")]
    InvalidRequest {
        id: Option<RequestId>,
        reason: String,
    },
}

impl MessageError {
    fn invalid(id: Option<RequestId>, reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            id,
            reason: reason.into(),
        }
    }

    /// The error reply owed to the sender.
    pub fn to_response(&self) -> JsonRpcErrorResponse {
        match self {
            Self::Parse(_) => JsonRpcErrorResponse::parse_error(self.to_string()),
            Self::InvalidRequest { id, .. } => JsonRpcErrorResponse::with_optional_id(
                id.clone(),
                error_codes::INVALID_REQUEST,
                self.to_string(),
            ),
        }
    }
}

impl IncomingMessage {
    /// Parses one line of JSON into a request or a notification.
    ///
    /// A present `id` must be an integer or a string; `null` and
    /// fractional ids are rejected rather than read as notifications.
    pub fn parse(line: &str) -> Result<Self, MessageError> {
        let value: Value = serde_json::from_str(line)?;
        let Value::Object(fields) = &value else {
            return Err(MessageError::invalid(None, "expected a JSON object"));
        };

        let id = match fields.get("id") {
            None => None,
            Some(raw) => match serde_json::from_value::<RequestId>(raw.clone()) {
                Ok(id) => Some(id),
                Err(_) => {
                    return Err(MessageError::invalid(
                        None,
                        format!("id must be an integer or a string, got {raw}"),
                    ))
                }
            },
        };

        if !matches!(fields.get("method"), Some(Value::String(_))) {
            return Err(MessageError::invalid(id, "method must be a string"));
        }

        match id {
            Some(id) => serde_json::from_value::<JsonRpcRequest>(value)
                .map(Self::Request)
                .map_err(|e| MessageError::invalid(Some(id), e.to_string())),
            None => serde_json::from_value::<JsonRpcNotification>(value)
                .map(Self::Notification)
                .map_err(|e| MessageError::invalid(None, e.to_string())),
        }
    }
}

/// Standard JSON-RPC error codes.
pub mod error_codes {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

impl JsonRpcRequest {
    /// Creates a new JSON-RPC 2.0 request.
    pub fn new(id: RequestId, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

impl JsonRpcResponse {
    /// Creates a success response.
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
        }
    }
}

impl JsonRpcErrorResponse {
    /// Creates an error response for a known request.
    pub fn error(id: RequestId, code: i32, message: impl Into<String>) -> Self {
        Self::with_optional_id(Some(id), code, message)
    }

    /// Creates a `PARSE_ERROR` response; the id is unknown so it is `null`.
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::with_optional_id(None, error_codes::PARSE_ERROR, message)
    }

    pub(crate) fn with_optional_id(id: Option<RequestId>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcError {
                code,
                message: message.into(),
                data: None,
            },
        }
    }
}
