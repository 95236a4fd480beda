//! Proxy gateway.
//!
//! Forwards `/api/proxy/<segments...>` (and any other configured mount) to a
//! single backend origin.
//!
//! ```text
//!     Client Request      ┌──────────────────────────────────────────────┐
//!     ────────────────────┼─▶ http::server ──▶ gateway::forward ─────────┼──▶ Backend
//!                         │    (verb adapters)   (allow-list, target URL) │
//!     Client Response     │                                              │
//!     ◀───────────────────┼── status + body + content-type, or 500 envelope ◀── Backend
//!                         └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use proxy_gateway::config::load_config;
use proxy_gateway::http::GatewayServer;
use proxy_gateway::lifecycle::Shutdown;
use proxy_gateway::observability::logging;

#[derive(Parser)]
#[command(name = "proxy-gateway")]
#[command(about = "Forwards API requests to a backend service", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override backend.base_url (and BACKEND_API_URL).
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(url) = cli.backend_url {
        config.backend.base_url = url;
    }

    logging::init(&config.observability);

    tracing::info!("proxy-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = %config.backend.base_url,
        retries = config.retries.enabled,
        request_timeout_secs = ?config.timeouts.request_secs,
        "Configuration loaded"
    );
    if config.backend.base_url.is_empty() {
        tracing::warn!("No backend URL configured; every forwarded request will fail with 500");
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = GatewayServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
