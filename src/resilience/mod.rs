//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Outbound call:
//!     → timeouts.rs (optional connect/request deadline on the client)
//!     → On forwarding failure: retries.rs (retryable? wait backoff, try again)
//! ```
//!
//! Both are opt-in. Without configuration a forward is one attempt with no deadline.

pub mod retries;
pub mod timeouts;

pub use retries::RetryPolicy;
pub use timeouts::OutboundTimeouts;
