//! HTTP response types and serialization.

use std::fmt;
use std::time::SystemTime;

/// Value of the `Server` header.
pub const SERVER_NAME: &str = "SimpleRustServer/0.1";

/// Content type used when none is given.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// A numeric HTTP status code.
///
/// Any `u16` is representable and echoed verbatim in the status line. Only
/// 200 and 404 have their own reason phrase; every other code is reported as
/// "Internal Server Error".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const METHOD_NOT_ALLOWED: StatusCode = StatusCode(405);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);

    /// The numeric code.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            404 => "Not Found",
            _ => "Internal Server Error",
        }
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode(code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

/// Represents an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// The value of the Content-Type header
    pub content_type: String,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new, empty HTML response with the given status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            body: Vec::new(),
        }
    }

    /// Set the response body with a string.
    pub fn with_body_string(self, body: impl Into<String>) -> Self {
        self.with_body_bytes(body.into().into_bytes())
    }

    /// Set the response body with bytes.
    pub fn with_body_bytes(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the content type. The value is not validated.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Convert the response to bytes, stamping it with the current time.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_bytes_at(SystemTime::now())
    }

    /// Convert the response to bytes with `date` as the Date header.
    ///
    /// Headers are written in a fixed order. Content-Length is the body length.
    pub fn to_bytes_at(&self, date: SystemTime) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {code} {reason}\r\n\
             Date: {date}\r\n\
             Server: {SERVER_NAME}\r\n\
             Content-Length: {len}\r\n\
             Content-Type: {content_type}\r\n\
             Connection: close\r\n\
             \r\n",
            code = self.status.as_u16(),
            reason = self.status.reason_phrase(),
            date = httpdate::fmt_http_date(date),
            len = self.body.len(),
            content_type = self.content_type,
        );

        let mut bytes = Vec::with_capacity(head.len() + self.body.len());
        bytes.extend_from_slice(head.as_bytes());
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

/// Serialize a complete response in one call.
///
/// Total over its inputs: unknown status codes get the "Internal Server
/// Error" phrase and `content_type` is passed through as is.
pub fn build_response(status: impl Into<StatusCode>, content: &[u8], content_type: &str) -> Vec<u8> {
    HttpResponse::new(status.into())
        .with_body_bytes(content)
        .with_content_type(content_type)
        .to_bytes()
}
