//! Timeout enforcement for the outbound call.
//!
//! # Design Decisions
//! - No deadline unless one is configured
//! - Enforced by the outbound client; an elapsed deadline is `GatewayError::Timeout`

use std::time::Duration;

use crate::config::TimeoutConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutboundTimeouts {
    pub connect: Option<Duration>,
    pub request: Option<Duration>,
}

impl OutboundTimeouts {
    pub fn from_config(config: &TimeoutConfig) -> Self {
        Self {
            connect: config.connect_secs.map(Duration::from_secs),
            request: config.request_secs.map(Duration::from_secs),
        }
    }

    pub fn apply(&self, mut builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
        if let Some(connect) = self.connect {
            builder = builder.connect_timeout(connect);
        }
        if let Some(request) = self.request {
            builder = builder.timeout(request);
        }
        builder
    }
}
