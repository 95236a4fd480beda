//! Forwarding core, independent of the HTTP framework.
//!
//! # Data Flow
//! ```text
//! HttpRequest (method, segments, query, headers, body)
//!     → target.rs (base URL + joined segments + query)
//!     → headers.rs (allow-list: authorization, content-type, accept)
//!     → forward.rs (outbound call, optional retry)
//!     → HttpResponse (backend status, body, content-type)
//!       or envelope.rs (500 JSON envelope on forwarding failure)
//! ```
//!
//! # State Machine
//! `received → dispatched → { relayed | failed }`, both terminal.

pub mod envelope;
pub mod error;
pub mod forward;
pub mod headers;
pub mod target;
pub mod types;

pub use envelope::{ErrorDetail, ErrorEnvelope};
pub use error::{GatewayError, GatewayResult};
pub use forward::{Gateway, GatewayOptions};
pub use headers::HeaderAllowList;
pub use types::{method_carries_body, HttpRequest, HttpResponse};
