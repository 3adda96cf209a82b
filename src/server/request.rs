use crate::dispatcher::{HeaderVec, ParamVec};
use may_minihttp::Request;
use std::sync::Arc;
use tracing::debug;

/// Parsed HTTP request data used by `AppService`.
#[derive(Debug, PartialEq)]
pub struct ParsedRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request path without the query string
    pub path: String,
    /// HTTP headers (lowercase names)
    pub headers: HeaderVec,
    /// Decoded query string parameters, in request order
    pub query_params: ParamVec,
}

/// Parse query string parameters from a URL path
///
/// Everything after the first `?` is decoded as
/// `application/x-www-form-urlencoded`, so `+` becomes a space and
/// percent escapes are resolved. Repeated keys are kept in order;
/// consumers take the last one.
pub fn parse_query_params(path: &str) -> ParamVec {
    match path.split_once('?') {
        Some((_, query_str)) => url::form_urlencoded::parse(query_str.as_bytes())
            .map(|(k, v)| (Arc::<str>::from(&*k), v.into_owned()))
            .collect(),
        None => ParamVec::new(),
    }
}

/// Strip the query string from a request target.
pub fn strip_query(raw_path: &str) -> &str {
    match raw_path.split_once('?') {
        Some((path, _)) if !path.is_empty() => path,
        Some(_) => "/",
        None => raw_path,
    }
}

/// Parse an incoming HTTP request into a [`ParsedRequest`].
pub fn parse_request(req: Request) -> ParsedRequest {
    let method = req.method().to_string();
    let raw_path = req.path();
    let path = strip_query(raw_path).to_string();

    let headers: HeaderVec = req
        .headers()
        .iter()
        .map(|h| {
            (
                Arc::from(h.name.to_ascii_lowercase()),
                String::from_utf8_lossy(h.value).into_owned(),
            )
        })
        .collect();

    let query_params = parse_query_params(raw_path);

    debug!(
        method = %method,
        path = %path,
        header_count = headers.len(),
        query_params = ?query_params,
        "HTTP request parsed"
    );

    ParsedRequest {
        method,
        path,
        headers,
        query_params,
    }
}
