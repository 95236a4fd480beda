//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! gateway + http layers produce:
//!     → tracing events (one per forwarded request, one per failure)
//!     → tower_http TraceLayer spans per inbound request
//!
//! logging.rs installs the subscriber (pretty or JSON) at startup.
//! ```

pub mod logging;
