//! Retry logic.
//!
//! # Responsibilities
//! - Decide whether a failed forward may be attempted again
//! - Compute exponential backoff with jitter between attempts
//!
//! # Design Decisions
//! - Disabled unless configured; a single failed attempt is the default
//! - Only forwarding failures are retried. A backend response of any status is relayed
//! - Only idempotent methods are retried (never POST or PATCH)

use std::time::Duration;

use axum::http::Method;
use rand::Rng;

use crate::config::RetryConfig;
use crate::gateway::GatewayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// One attempt, no retries.
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        if !config.enabled {
            return Self::disabled();
        }
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: Duration::from_millis(config.base_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
        }
    }

    /// Whether `attempt` (1-based) may be followed by another.
    pub fn should_retry(&self, attempt: u32, method: &Method, err: &GatewayError) -> bool {
        attempt < self.max_attempts && is_retryable(method, err)
    }

    /// Delay before the attempt following `attempt`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        calculate_backoff(
            attempt,
            self.base_delay.as_millis() as u64,
            self.max_delay.as_millis() as u64,
        )
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Transport failures of idempotent requests are retryable; nothing else is.
pub fn is_retryable(method: &Method, err: &GatewayError) -> bool {
    method.is_idempotent() && matches!(err, GatewayError::Upstream(_))
}

/// Exponential backoff capped at `max_ms`, plus up to 10% jitter.
pub fn calculate_backoff(attempt: u32, base_ms: u64, max_ms: u64) -> Duration {
    if attempt == 0 {
        return Duration::ZERO;
    }

    let factor = 2u64.saturating_pow(attempt - 1);
    let capped = base_ms.saturating_mul(factor).min(max_ms);

    let jitter_range = capped / 10;
    let jitter = if jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(capped + jitter)
}
