//! Transport-layer error types.

use shelf_types::{ErrorKind, ShelfError};
use thiserror::Error;

/// Errors from the stdio transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to read from the input stream.
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),
    /// Failed to write to the output stream.
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),
    /// A reply could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<TransportError> for ShelfError {
    fn from(e: TransportError) -> Self {
        ShelfError::new(ErrorKind::Internal, e.to_string())
    }
}
