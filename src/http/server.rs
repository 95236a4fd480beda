//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with one mount per configured route
//! - Expose GET, POST, PUT, PATCH and DELETE per mount, all delegating to one handler
//! - Wire up middleware (tracing, request ID)
//! - Serve until the shutdown signal fires

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::{GatewayConfig, RouteConfig};
use crate::gateway::target::split_path;
use crate::gateway::{ErrorEnvelope, Gateway, GatewayOptions, GatewayResult};
use crate::http::request::{into_gateway_request, propagate_request_id_layer, set_request_id_layer};

/// Per-mount state injected into the handler.
#[derive(Clone)]
pub struct RouteState {
    pub gateway: Gateway,
    pub backend_prefix: Arc<[String]>,
    pub max_body_size: usize,
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server from a validated configuration.
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let gateway = Gateway::new(GatewayOptions::from_config(&config))?;
        let router = Self::build_router(&config, gateway);
        Ok(Self { router, config })
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, gateway: Gateway) -> Router {
        let mut app = Router::new();
        for route in &config.routes {
            let state = RouteState {
                gateway: gateway.clone(),
                backend_prefix: split_path(&route.backend_prefix).into(),
                max_body_size: config.limits.max_body_size,
            };
            app = app.nest(&route.mount, mount_router(route, state));
        }

        app.layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.base_url,
            routes = self.config.routes.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The assembled router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// The verb adapters for one mount. Unlisted methods get axum's 405.
fn mount_router(route: &RouteConfig, state: RouteState) -> Router {
    tracing::debug!(mount = %route.mount, backend_prefix = %route.backend_prefix, "Mounting route");

    let methods: MethodRouter<RouteState> = get(proxy_handler)
        .post(proxy_handler)
        .put(proxy_handler)
        .patch(proxy_handler)
        .delete(proxy_handler);

    Router::new().route("/{*path}", methods).with_state(state)
}

/// Shared handler behind every verb.
async fn proxy_handler(State(route): State<RouteState>, request: Request<Body>) -> Response {
    let method = request.method().clone();

    match into_gateway_request(request, &route.backend_prefix, route.max_body_size).await {
        Ok(request) => route.gateway.forward(request).await.into_response(),
        Err(err) => {
            tracing::error!(method = %method, error = %err, "Failed to read inbound request");
            ErrorEnvelope::from(&err).into_http_response().into_response()
        }
    }
}
