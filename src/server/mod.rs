//! Static file HTTP server.
//!
//! Each accepted connection is served by its own tokio task: one request is
//! read, answered from the document root, and the connection is closed.

mod response;
mod config;
mod document_root;
mod error;
mod handler;
mod http_server;

// Re-export public items
pub use response::{build_response, HttpResponse, StatusCode, DEFAULT_CONTENT_TYPE, SERVER_NAME};
pub use config::ServerConfig;
pub use document_root::{DocumentRoot, FileReadResult};
pub use error::Error;
pub use handler::{bad_request, content_type_for, serve_request};
pub use http_server::{ConnectionOutcome, HttpServer};
