//! A minimal static file HTTP/1.1 server.
//!
//! Every accepted connection carries exactly one request. The request line is
//! parsed, `GET` requests are answered with the matching file below the
//! document root, and the connection is closed.
//!
//! # Features
//!
//! - Request-line parsing that ignores headers and body
//! - `/` served as `/index.html`
//! - `text/html` for `.html` files, `application/octet-stream` otherwise
//! - 404 for missing files, 405 for methods other than `GET`, 400 for
//!   malformed request lines
//! - One tokio task per connection, with an optional connection cap and
//!   read deadline
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use simple_httpd::{parse_request, Method};
//!
//! let request = parse_request(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
//! assert_eq!(request.method, Method::GET);
//! assert_eq!(request.path, "/index.html");
//! assert_eq!(request.version, "HTTP/1.1");
//! ```
//!
//! ## Building a response
//!
//! ```
//! use simple_httpd::build_response;
//!
//! let bytes = build_response(404u16, b"404 Not Found", "text/html");
//! let text = String::from_utf8(bytes).unwrap();
//! assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
//! assert!(text.contains("Content-Length: 13\r\n"));
//! assert!(text.ends_with("\r\n\r\n404 Not Found"));
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use simple_httpd::{DocumentRoot, HttpServer, ServerConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::new(DocumentRoot::current_dir()?);
//! HttpServer::new(config).start().await?;
//! # Ok(())
//! # }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, Method, parse_request};
pub use server::{
    build_response, ConnectionOutcome, DocumentRoot, Error as ServerError, FileReadResult, HttpResponse,
    HttpServer, ServerConfig, StatusCode,
};
