//! Gateway error taxonomy.
//!
//! Every variant is a forwarding failure: no backend response was obtained.
//! Backend responses with error statuses are not errors here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The joined target does not parse as a URL (usually a missing backend URL).
    #[error("invalid target URL '{url}': {source}")]
    InvalidTarget {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport failure talking to the backend.
    #[error("upstream request failed: {0}")]
    Upstream(#[source] reqwest::Error),

    /// The configured outbound timeout elapsed.
    #[error("upstream request timed out")]
    Timeout,

    /// The inbound body could not be read.
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    #[error("invalid default content type '{0}'")]
    InvalidContentType(String),

    #[error("invalid forwarded header name '{0}'")]
    InvalidHeaderName(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl GatewayError {
    /// Classify an error returned by the outbound client.
    pub fn from_upstream(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::Upstream(err)
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
