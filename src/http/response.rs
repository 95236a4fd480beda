//! Outbound response conversion.
//!
//! The gateway response already carries the backend status, body and
//! content-type. This only moves it into axum's type without touching bytes.

use axum::body::Body;
use axum::response::{IntoResponse, Response};

use crate::gateway::HttpResponse;

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
