//! Error types for document sinks
//!
//! Building a document never fails. Only writing it somewhere can.

use thiserror::Error;

/// Result type used by the sink operations
pub type Result<T> = std::result::Result<T, ExcelError>;

/// Errors that can occur while handing a document to a sink
#[derive(Debug, Error)]
pub enum ExcelError {
    /// IO error from the underlying writer or file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sink could not write the document
    #[error("Write error: {0}")]
    WriteError(String),
}
