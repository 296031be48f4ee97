//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur while parsing a request line.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line is malformed (not UTF-8, or not exactly three tokens).
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The request target does not start with `/`.
    #[error("Invalid HTTP path: {0}")]
    InvalidPath(String),

    /// The request is empty.
    #[error("Empty request")]
    EmptyRequest,
}
