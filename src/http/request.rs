//! Inbound request handling.
//!
//! # Responsibilities
//! - Assign a request ID (UUID v4) to every inbound request
//! - Convert an axum request into a gateway `HttpRequest`
//! - Read the body only for methods that carry one, bounded by the size limit
//!
//! # Design Decisions
//! - Path segments come from the raw URI path, so percent-encoding survives
//! - The request ID lives on the inbound side only; the allow-list keeps it
//!   away from the backend

use axum::body::{to_bytes, Body};
use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use uuid::Uuid;

use crate::gateway::target::split_path;
use crate::gateway::{method_carries_body, GatewayError, GatewayResult, HttpRequest};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Layer assigning `x-request-id` to requests that lack one.
pub fn set_request_id_layer() -> SetRequestIdLayer<UuidRequestId> {
    SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId)
}

/// Layer echoing `x-request-id` back on the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(X_REQUEST_ID)
}

/// Convert an inbound request whose URI path is the wildcard suffix.
///
/// `prefix` segments are placed before the captured ones.
pub async fn into_gateway_request(
    request: Request<Body>,
    prefix: &[String],
    max_body_size: usize,
) -> GatewayResult<HttpRequest> {
    let (parts, body) = request.into_parts();

    let mut path_segments = prefix.to_vec();
    path_segments.extend(split_path(parts.uri.path()));

    let body = if method_carries_body(&parts.method) {
        let bytes = to_bytes(body, max_body_size)
            .await
            .map_err(|e| GatewayError::BodyRead(e.to_string()))?;
        Some(bytes)
    } else {
        None
    };

    Ok(HttpRequest {
        method: parts.method,
        path_segments,
        query: parts.uri.query().map(str::to_owned),
        headers: parts.headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    #[tokio::test]
    async fn test_conversion_with_prefix() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/42/stage?page=2&limit=10")
            .header("authorization", "Bearer x")
            .body(Body::from("not-json"))
            .unwrap();

        let converted = into_gateway_request(request, &["pipelines".to_string()], 1024)
            .await
            .unwrap();

        assert_eq!(converted.path_segments, vec!["pipelines", "42", "stage"]);
        assert_eq!(converted.query.as_deref(), Some("page=2&limit=10"));
        assert_eq!(converted.body.as_deref(), Some(&b"not-json"[..]));
        assert_eq!(converted.headers["authorization"], "Bearer x");
    }

    #[tokio::test]
    async fn test_get_body_is_not_read() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/leads")
            .body(Body::from("ignored"))
            .unwrap();

        let converted = into_gateway_request(request, &[], 1024).await.unwrap();
        assert!(converted.body.is_none());
        assert!(converted.query.is_none());
    }

    #[tokio::test]
    async fn test_body_over_limit_fails() {
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/leads/1")
            .body(Body::from(vec![b'x'; 64]))
            .unwrap();

        let err = into_gateway_request(request, &[], 16).await.unwrap_err();
        assert!(matches!(err, GatewayError::BodyRead(_)));
    }

    #[test]
    fn test_request_ids_are_unique() {
        let mut make = UuidRequestId;
        let request = Request::new(());
        let a = make.make_request_id(&request).unwrap();
        let b = make.make_request_id(&request).unwrap();
        assert_ne!(a.header_value(), b.header_value());
    }
}
