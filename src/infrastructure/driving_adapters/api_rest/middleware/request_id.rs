//! Request Correlation
//!
//! Every log line emitted while serving a request carries the same id, and
//! that id is handed back in `x-request-id` so clients can quote it. A caller
//! that already sent one keeps it.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the correlation id in both directions
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// The caller's id when it sent a usable one, otherwise a fresh UUID v4
fn correlation_id(headers: &HeaderMap) -> String {
    headers
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_string)
}

/// Runs the rest of the stack inside a `request` span and echoes the id
pub async fn request_id_middleware(request: Request<Body>, next: Next) -> Response {
    let id = correlation_id(request.headers());

    let span = tracing::info_span!(
        "request",
        request_id = %id,
        method = %request.method(),
        uri = %request.uri(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_id_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(&REQUEST_ID_HEADER, HeaderValue::from_static("trace-42"));

        assert_eq!(correlation_id(&headers), "trace-42");
    }

    #[test]
    fn test_missing_or_empty_id_is_generated() {
        let generated = correlation_id(&HeaderMap::new());
        assert!(Uuid::parse_str(&generated).is_ok());

        let mut headers = HeaderMap::new();
        headers.insert(&REQUEST_ID_HEADER, HeaderValue::from_static(""));
        assert!(Uuid::parse_str(&correlation_id(&headers)).is_ok());
    }
}
