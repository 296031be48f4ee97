//! HTTP request-line parser.
//!
//! Only the first line of a request is inspected. Headers and body bytes that
//! follow it are left untouched.

mod request;
mod method;
mod error;

// Re-export public items
pub use request::HttpRequest;
pub use method::Method;
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;
