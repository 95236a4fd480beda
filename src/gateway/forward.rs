//! The forwarding routine shared by every inbound method.

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::{header, HeaderValue};

use crate::config::GatewayConfig;
use crate::gateway::envelope::ErrorEnvelope;
use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::headers::HeaderAllowList;
use crate::gateway::target::{build_target, parse_target};
use crate::gateway::types::{HttpRequest, HttpResponse};
use crate::resilience::{OutboundTimeouts, RetryPolicy};

/// Construction inputs for a [`Gateway`].
#[derive(Debug, Clone)]
pub struct GatewayOptions {
    pub base_url: String,
    pub allowed_headers: Vec<String>,
    pub default_content_type: String,
    pub timeouts: OutboundTimeouts,
    pub retry: RetryPolicy,
}

impl GatewayOptions {
    /// Defaults aimed at `base_url`: standard allow-list, no timeout, no retries.
    pub fn new(base_url: impl Into<String>) -> Self {
        let defaults = GatewayConfig::default();
        Self {
            base_url: base_url.into(),
            allowed_headers: defaults.forwarding.allowed_headers,
            default_content_type: defaults.forwarding.default_content_type,
            timeouts: OutboundTimeouts::default(),
            retry: RetryPolicy::disabled(),
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            base_url: config.backend.base_url.clone(),
            allowed_headers: config.forwarding.allowed_headers.clone(),
            default_content_type: config.forwarding.default_content_type.clone(),
            timeouts: OutboundTimeouts::from_config(&config.timeouts),
            retry: RetryPolicy::from_config(&config.retries),
        }
    }
}

/// Forwards requests to one backend origin.
///
/// Stateless apart from the pooled outbound client; cheap to clone.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: Arc<str>,
    allow_list: Arc<HeaderAllowList>,
    default_content_type: HeaderValue,
    retry: RetryPolicy,
}

impl Gateway {
    pub fn new(options: GatewayOptions) -> GatewayResult<Self> {
        let allow_list = HeaderAllowList::new(&options.allowed_headers)?;
        let default_content_type = HeaderValue::from_str(&options.default_content_type)
            .map_err(|_| GatewayError::InvalidContentType(options.default_content_type.clone()))?;

        // 3xx responses are relayed, never followed
        let builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy();
        let client = options
            .timeouts
            .apply(builder)
            .build()
            .map_err(GatewayError::Client)?;

        Ok(Self {
            client,
            base_url: Arc::from(options.base_url),
            allow_list: Arc::new(allow_list),
            default_content_type,
            retry: options.retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The URL a request would be sent to, before parsing.
    pub fn target_for(&self, request: &HttpRequest) -> String {
        build_target(&self.base_url, &request.path_segments, request.query.as_deref())
    }

    /// Forward and always produce a response.
    ///
    /// Backend responses are relayed as-is whatever their status. Any failure
    /// before a backend response exists becomes a 500 error envelope.
    pub async fn forward(&self, request: HttpRequest) -> HttpResponse {
        match self.try_forward(request).await {
            Ok(response) => response,
            Err(err) => ErrorEnvelope::from(&err).into_http_response(),
        }
    }

    /// Forward, surfacing forwarding failures as typed errors.
    pub async fn try_forward(&self, request: HttpRequest) -> GatewayResult<HttpResponse> {
        let target = self.target_for(&request);
        tracing::info!(method = %request.method, url = %target, "Proxying request");

        let result = self.dispatch(&request, &target).await;
        if let Err(err) = &result {
            tracing::error!(
                method = %request.method,
                url = %target,
                error = %err,
                "Proxy request failed"
            );
        }
        result
    }

    async fn dispatch(&self, request: &HttpRequest, target: &str) -> GatewayResult<HttpResponse> {
        let url = parse_target(target)?;
        let headers = self.allow_list.filter(&request.headers);
        let body = if request.carries_body() {
            Some(request.body.clone().unwrap_or_default())
        } else {
            None
        };

        let mut attempt = 0;
        loop {
            attempt += 1;

            let mut outbound = self
                .client
                .request(request.method.clone(), url.clone())
                .headers(headers.clone());
            if let Some(body) = &body {
                outbound = outbound.body(body.clone());
            }

            match outbound.send().await.map_err(GatewayError::from_upstream) {
                Ok(response) => return self.relay(response).await,
                Err(err) if self.retry.should_retry(attempt, &request.method, &err) => {
                    let delay = self.retry.backoff(attempt);
                    tracing::warn!(
                        method = %request.method,
                        url = %target,
                        attempt,
                        delay = ?delay,
                        error = %err,
                        "Retrying after forwarding failure"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn relay(&self, response: reqwest::Response) -> GatewayResult<HttpResponse> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .cloned()
            .unwrap_or_else(|| self.default_content_type.clone());
        let location = status
            .is_redirection()
            .then(|| response.headers().get(header::LOCATION).cloned())
            .flatten();
        let body: Bytes = response.bytes().await.map_err(GatewayError::from_upstream)?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Relaying backend response");

        let mut relayed = HttpResponse::new(status, content_type, body);
        if let Some(location) = location {
            relayed.headers.insert(header::LOCATION, location);
        }
        Ok(relayed)
    }
}
