//! HTTP request parsing and representation.

use crate::parser::error::Error;
use crate::parser::method::Method;

/// The parts of an HTTP request that the server acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path, always starting with `/`
    pub path: String,
    /// The protocol version token, kept as sent
    pub version: String,
}

impl HttpRequest {
    /// Create a new HTTP request.
    pub fn new(method: Method, path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            version: version.into(),
        }
    }
}

/// Parse the request line at the start of `input`.
///
/// Only the bytes up to the first `\n` are decoded, so a truncated header
/// section never makes an otherwise valid request fail.
///
/// # Arguments
///
/// * `input` - The raw bytes read from the connection
///
/// # Returns
///
/// The parsed HTTP request, or an error if the request line is invalid
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    if input.is_empty() {
        return Err(Error::EmptyRequest);
    }

    // Isolate the first line
    let line_end = input.iter().position(|&b| b == b'\n').unwrap_or(input.len());
    let line = &input[..line_end];
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    let request_line = std::str::from_utf8(line)
        .map_err(|_| Error::MalformedRequestLine(String::from_utf8_lossy(line).into_owned()))?;

    // Split the request line into method, path, and version
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    let [method, path, version] = parts[..] else {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    };

    if !path.starts_with('/') {
        return Err(Error::InvalidPath(path.to_string()));
    }

    Ok(HttpRequest::new(Method::from(method), path, version))
}
