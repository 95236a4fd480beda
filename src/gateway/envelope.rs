//! JSON envelope for gateway-originated failures.

use axum::http::{HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};

use crate::gateway::error::GatewayError;
use crate::gateway::types::HttpResponse;

pub const FALLBACK_MESSAGE: &str = "Proxy request failed";

/// `{ "success": false, "error": { "message": "..." } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = FALLBACK_MESSAGE.to_string();
        }
        Self {
            success: false,
            error: ErrorDetail { message },
        }
    }

    /// Render as a 500 response.
    pub fn into_http_response(self) -> HttpResponse {
        let body = serde_json::to_vec(&self).unwrap_or_else(|_| {
            format!(r#"{{"success":false,"error":{{"message":"{FALLBACK_MESSAGE}"}}}}"#).into_bytes()
        });
        HttpResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            HeaderValue::from_static("application/json"),
            body,
        )
    }
}

impl From<&GatewayError> for ErrorEnvelope {
    fn from(err: &GatewayError) -> Self {
        ErrorEnvelope::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let response = ErrorEnvelope::new("connection refused").into_http_response();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.content_type(), Some("application/json"));

        let value: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"success": false, "error": {"message": "connection refused"}})
        );
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(ErrorEnvelope::new("  ").error.message, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_from_gateway_error() {
        let envelope = ErrorEnvelope::from(&GatewayError::Timeout);
        assert!(!envelope.success);
        assert_eq!(envelope.error.message, "upstream request timed out");
    }
}
