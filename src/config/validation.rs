//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, retry bounds)
//! - Detect conflicting route mounts
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - An empty backend URL is not an error; it surfaces per request instead

use std::collections::HashSet;
use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("no routes configured")]
    NoRoutes,

    #[error("route mount '{0}' must start with '/', must not end with '/' and must not use capture syntax")]
    MountShape(String),

    #[error("route mount '{0}' is declared more than once")]
    DuplicateMount(String),

    #[error("'{0}' is not a valid header name")]
    HeaderName(String),

    #[error("'{0}' is not a valid default content type")]
    ContentType(String),

    #[error("retries.max_attempts must be at least 1")]
    MaxAttempts,

    #[error("retries.base_delay_ms ({base}) exceeds retries.max_delay_ms ({max})")]
    BackoffBounds { base: u64, max: u64 },

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("limits.max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }
    let mut seen = HashSet::new();
    for route in &config.routes {
        let mount = route.mount.as_str();
        if !mount_is_well_formed(mount) {
            errors.push(ValidationError::MountShape(route.mount.clone()));
        }
        if !seen.insert(mount) {
            errors.push(ValidationError::DuplicateMount(route.mount.clone()));
        }
    }

    for name in &config.forwarding.allowed_headers {
        if HeaderName::from_bytes(name.to_ascii_lowercase().as_bytes()).is_err() {
            errors.push(ValidationError::HeaderName(name.clone()));
        }
    }

    if HeaderValue::from_str(&config.forwarding.default_content_type).is_err() {
        errors.push(ValidationError::ContentType(
            config.forwarding.default_content_type.clone(),
        ));
    }

    if config.retries.max_attempts == 0 {
        errors.push(ValidationError::MaxAttempts);
    }
    if config.retries.base_delay_ms > config.retries.max_delay_ms {
        errors.push(ValidationError::BackoffBounds {
            base: config.retries.base_delay_ms,
            max: config.retries.max_delay_ms,
        });
    }

    if config.timeouts.connect_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A mount is a literal path prefix. Segments the router would read as
/// captures (`:id`, `*rest`, `{id}`) make `Router::nest` panic.
fn mount_is_well_formed(mount: &str) -> bool {
    mount.starts_with('/')
        && !mount.ends_with('/')
        && mount.split('/').all(|segment| {
            !segment.starts_with(':')
                && !segment.starts_with('*')
                && !segment.contains(['{', '}'])
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&GatewayConfig::default()), Ok(()));
    }

    #[test]
    fn test_missing_backend_url_is_not_rejected() {
        let mut config = GatewayConfig::default();
        config.backend.base_url.clear();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.retries.max_attempts = 0;
        config.timeouts.request_secs = Some(0);
        config.forwarding.allowed_headers.push("bad header".into());
        config.forwarding.default_content_type = "text/plain\n".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::MaxAttempts));
        assert!(errors.contains(&ValidationError::ZeroTimeout("request_secs")));
        assert!(errors.contains(&ValidationError::HeaderName("bad header".into())));
    }

    #[test]
    fn test_route_mount_rules() {
        let mut config = GatewayConfig::default();
        config.routes = vec![
            RouteConfig { mount: "/api/sales".into(), backend_prefix: "sales".into() },
            RouteConfig { mount: "/api/sales".into(), backend_prefix: String::new() },
            RouteConfig { mount: "api/contact/".into(), backend_prefix: String::new() },
            RouteConfig { mount: "/api/*legacy".into(), backend_prefix: String::new() },
            RouteConfig { mount: "/api/:tenant".into(), backend_prefix: String::new() },
            RouteConfig { mount: "/api/{tenant}/v1".into(), backend_prefix: String::new() },
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::DuplicateMount("/api/sales".into()),
                ValidationError::MountShape("api/contact/".into()),
                ValidationError::MountShape("/api/*legacy".into()),
                ValidationError::MountShape("/api/:tenant".into()),
                ValidationError::MountShape("/api/{tenant}/v1".into()),
            ]
        );
    }

    #[test]
    fn test_empty_routes_rejected() {
        let mut config = GatewayConfig::default();
        config.routes.clear();
        assert_eq!(validate_config(&config), Err(vec![ValidationError::NoRoutes]));
    }
}
