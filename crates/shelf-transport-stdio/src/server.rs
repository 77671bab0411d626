//! MCP server loop over the line transport.
//!
//! Reads JSON-RPC messages line by line, dispatches requests via
//! `McpHandler`, and writes replies back. Notifications get no reply.
//! Lines that are not JSON (or not UTF-8) get a `PARSE_ERROR` reply with a
//! null id; JSON that is not a valid message gets `INVALID_REQUEST`. The
//! loop keeps going either way.

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info, warn};

use shelf_mcp::{JsonRpcOutput, McpHandler};
use shelf_protocol::{IncomingMessage, JsonRpcErrorResponse};

use crate::error::TransportError;
use crate::transport::{Inbound, StdioTransport};

/// Message counts for one server session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub requests: u64,
    pub notifications: u64,
    pub rejected: u64,
}

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: McpHandler,
}

impl<R, W> McpServer<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: McpHandler) -> Self {
        Self { transport, handler }
    }

    /// Runs the server loop until the input is closed.
    ///
    /// Only transport I/O failures end the loop early.
    pub async fn run(&mut self) -> Result<SessionSummary, TransportError> {
        info!("MCP server starting on stdio");
        let mut summary = SessionSummary::default();

        while let Some(inbound) = self.transport.next_line().await? {
            let line = match inbound {
                Inbound::Line(line) => line,
                Inbound::NotUtf8(e) => {
                    summary.rejected += 1;
                    warn!(error = %e, "received non-UTF-8 line");
                    let reply = JsonRpcErrorResponse::parse_error(format!("parse error: {e}"));
                    self.write_output(&JsonRpcOutput::Error(reply)).await?;
                    continue;
                }
            };

            match IncomingMessage::parse(&line) {
                Ok(IncomingMessage::Request(request)) => {
                    summary.requests += 1;
                    debug!(method = %request.method, id = ?request.id, "received request");
                    let output = self.handler.dispatch(&request).await;
                    self.write_output(&output).await?;
                }
                Ok(IncomingMessage::Notification(notification)) => {
                    summary.notifications += 1;
                    debug!(method = %notification.method, "received notification");
                    self.handler.handle_notification(&notification);
                }
                Err(e) => {
                    summary.rejected += 1;
                    warn!(error = %e, "rejected JSON-RPC message");
                    self.write_output(&JsonRpcOutput::Error(e.to_response())).await?;
                }
            }
        }

        info!(
            requests = summary.requests,
            notifications = summary.notifications,
            rejected = summary.rejected,
            "input closed, shutting down"
        );
        Ok(summary)
    }

    async fn write_output(&mut self, output: &JsonRpcOutput) -> Result<(), TransportError> {
        let json = output.to_json()?;
        self.transport.write_line(&json).await
    }
}
