//! API proxy gateway library.

pub mod config;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::GatewayConfig;
pub use gateway::{Gateway, GatewayOptions, HttpRequest, HttpResponse};
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
