//! Framework-independent request and response values.

use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};

/// An inbound request as the gateway sees it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Backend-relative path, one entry per segment, still percent-encoded.
    pub path_segments: Vec<String>,
    /// Raw query string without the leading `?`.
    pub query: Option<String>,
    pub headers: HeaderMap,
    /// Raw body bytes. Ignored for methods that carry no body.
    pub body: Option<Bytes>,
}

impl HttpRequest {
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            path_segments: segments.into_iter().map(Into::into).collect(),
            query: None,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Whether this request's body is read and forwarded.
    pub fn carries_body(&self) -> bool {
        method_carries_body(&self.method)
    }
}

/// GET, DELETE and HEAD never have their body read or forwarded.
pub fn method_carries_body(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::DELETE | Method::HEAD)
}

/// The response handed back to the original caller.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, content_type: HeaderValue, body: impl Into<Bytes>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(axum::http::header::CONTENT_TYPE, content_type);
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }
}
