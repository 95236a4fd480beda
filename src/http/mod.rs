//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum router, one nested mount per route, verb adapters)
//!     → request.rs (request ID, axum request → HttpRequest)
//!     → gateway::Gateway::forward
//!     → response.rs (HttpResponse → axum response)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{GatewayServer, RouteState};
