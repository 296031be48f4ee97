//! Maps a parsed request onto a response from the document root.

use std::path::Path;

use log::warn;

use crate::parser::{HttpRequest, Method};
use crate::server::document_root::{DocumentRoot, FileReadResult};
use crate::server::response::{HttpResponse, StatusCode};

const NOT_FOUND_BODY: &str = "404 Not Found";
const METHOD_NOT_ALLOWED_BODY: &str = "405 Method Not Allowed";
const BAD_REQUEST_BODY: &str = "400 Bad Request";

const HTML: &str = "text/html";
const OCTET_STREAM: &str = "application/octet-stream";

/// Content type for a file, judged by the name alone.
pub fn content_type_for(path: &Path) -> &'static str {
    if path.to_string_lossy().ends_with(".html") {
        HTML
    } else {
        OCTET_STREAM
    }
}

/// Build the response for a single request.
///
/// Only `GET` is served. A missing or unreadable file gives 404, with the
/// content type still taken from the requested name.
pub async fn serve_request(request: &HttpRequest, root: &DocumentRoot) -> HttpResponse {
    if request.method != Method::GET {
        return HttpResponse::new(StatusCode::METHOD_NOT_ALLOWED)
            .with_content_type(HTML)
            .with_body_string(METHOD_NOT_ALLOWED_BODY);
    }

    let Some(file_path) = root.resolve(&request.path) else {
        warn!("Rejected path outside document root: {path}", path = request.path);
        return HttpResponse::new(StatusCode::NOT_FOUND)
            .with_content_type(content_type_for(Path::new(&request.path)))
            .with_body_string(NOT_FOUND_BODY);
    };

    let (status, body) = match root.read(&file_path).await {
        FileReadResult::Found(content) => (StatusCode::OK, content),
        FileReadResult::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_BODY.as_bytes().to_vec()),
    };

    HttpResponse::new(status)
        .with_content_type(content_type_for(&file_path))
        .with_body_bytes(body)
}

/// Response sent when the request line cannot be parsed.
pub fn bad_request() -> HttpResponse {
    HttpResponse::new(StatusCode::BAD_REQUEST)
        .with_content_type(HTML)
        .with_body_string(BAD_REQUEST_BODY)
}
