//! Line-delimited JSON transport.
//!
//! Each JSON-RPC message is a single line terminated by `\n`.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::trace;

use crate::error::TransportError;

/// One non-blank line read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// A trimmed UTF-8 line.
    Line(String),
    /// The line's bytes are not valid UTF-8.
    NotUtf8(std::str::Utf8Error),
}

/// Reads JSON-RPC lines from a reader, writes replies to a writer.
///
/// Generic over reader/writer so tests can drive it with byte slices.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl StdioTransport<tokio::io::Stdin, tokio::io::Stdout> {
    /// Transport bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> StdioTransport<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a new transport with the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Reads the next non-blank line.
    ///
    /// Returns `None` on EOF. Invalid UTF-8 is reported per line so the
    /// caller can reject it and keep reading.
    pub async fn next_line(&mut self) -> Result<Option<Inbound>, TransportError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let bytes_read = self
                .reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(TransportError::Read)?;
            if bytes_read == 0 {
                return Ok(None);
            }
            let text = match std::str::from_utf8(&buf) {
                Ok(text) => text,
                Err(e) => {
                    trace!(len = bytes_read, "read non-UTF-8 line");
                    return Ok(Some(Inbound::NotUtf8(e)));
                }
            };
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                trace!(len = trimmed.len(), "read message");
                return Ok(Some(Inbound::Line(trimmed.to_string())));
            }
        }
    }

    /// Writes one reply line and flushes.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");
        self.writer
            .write_all(message.as_bytes())
            .await
            .map_err(TransportError::Write)?;
        self.writer
            .write_all(b"\n")
            .await
            .map_err(TransportError::Write)?;
        self.writer.flush().await.map_err(TransportError::Write)
    }
}
