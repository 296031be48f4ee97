//! Error types for the HTTP server.

use std::time::Duration;

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur while serving a connection or starting the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The client sent nothing within the read deadline.
    #[error("No request received within {0:?}")]
    Timeout(Duration),
}
