use crate::dispatcher::HandlerResponse;
use may_minihttp::Response;

pub(crate) fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "OK",
    }
}

/// `Content-Type` header line for a MIME type.
///
/// `may_minihttp` only accepts `&'static str` headers, so every type the
/// site can emit has a fixed line here. Unknown types fall back to
/// `application/octet-stream`.
pub(crate) fn content_type_header(content_type: &str) -> &'static str {
    match content_type {
        "text/html" | "text/html; charset=utf-8" => "Content-Type: text/html; charset=utf-8",
        "text/plain" => "Content-Type: text/plain",
        "text/plain; charset=utf-8" => "Content-Type: text/plain; charset=utf-8",
        "text/css" => "Content-Type: text/css",
        "application/javascript" => "Content-Type: application/javascript",
        "application/json" => "Content-Type: application/json",
        "text/plain; version=0.0.4" => "Content-Type: text/plain; version=0.0.4",
        "image/svg+xml" => "Content-Type: image/svg+xml",
        "image/png" => "Content-Type: image/png",
        "image/jpeg" => "Content-Type: image/jpeg",
        "image/gif" => "Content-Type: image/gif",
        "image/webp" => "Content-Type: image/webp",
        "image/x-icon" => "Content-Type: image/x-icon",
        _ => "Content-Type: application/octet-stream",
    }
}

/// Write raw bytes with a status and content type.
pub fn write_bytes(res: &mut Response, status: u16, content_type: &str, body: Vec<u8>) {
    res.status_code(status as usize, status_reason(status));
    res.header(content_type_header(content_type));
    res.body_vec(body);
}

/// Write a dispatcher response to the wire.
///
/// Only `content-type` is forwarded; other handler headers stay in the
/// process for logging.
pub fn write_handler_response(res: &mut Response, hr: HandlerResponse) {
    let content_type = hr
        .get_header("content-type")
        .unwrap_or("text/plain; charset=utf-8")
        .to_string();
    write_bytes(res, hr.status, &content_type, hr.body.into_bytes());
}

/// Write a JSON body.
pub fn write_json(res: &mut Response, status: u16, body: &serde_json::Value) {
    write_bytes(res, status, "application/json", body.to_string().into_bytes());
}
