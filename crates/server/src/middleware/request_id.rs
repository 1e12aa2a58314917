//! Request ID middleware for log correlation.
//!
//! An upstream `x-request-id` is trusted only when it is short printable
//! ASCII; anything else is replaced by a fresh UUID v4 so arbitrary client
//! input never lands in log fields or Sentry tags.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID accepted as-is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Tag the request span and Sentry scope with a request ID and echo it back.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id =
        inbound_request_id(request.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// The caller's request ID, if it is usable.
fn inbound_request_id(headers: &HeaderMap) -> Option<String> {
    let id = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?.trim();
    let usable = !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id.bytes().all(|b| b.is_ascii_graphic());
    usable.then(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(id) {
            headers.insert(REQUEST_ID_HEADER, value);
        }
        headers
    }

    #[test]
    fn test_upstream_id_is_kept() {
        assert_eq!(
            inbound_request_id(&headers_with("cf-7f3a9c")).as_deref(),
            Some("cf-7f3a9c")
        );
        assert_eq!(
            inbound_request_id(&headers_with("  padded  ")).as_deref(),
            Some("padded")
        );
    }

    #[test]
    fn test_unusable_ids_are_replaced() {
        assert!(inbound_request_id(&HeaderMap::new()).is_none());
        assert!(inbound_request_id(&headers_with("")).is_none());
        assert!(inbound_request_id(&headers_with("two words")).is_none());
        assert!(inbound_request_id(&headers_with(&"x".repeat(MAX_REQUEST_ID_LEN + 1))).is_none());
    }
}
