use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use zoom_api_gateway::{app, config, state::AppState};

#[derive(Debug, Parser)]
#[command(name = "zoom-api-gateway", version, about = "Authenticated gateway in front of the Zoom REST API")]
struct Cli {
    /// Interface to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so credentials and APP_ENV are picked up
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("zoom_api_gateway=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = config::config().clone();
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    tracing::info!("Starting Zoom API gateway in {:?} mode", config.environment);
    if config.credentials().api_secret.is_empty() {
        tracing::warn!("No API secret configured for {:?} mode; /api/login will fail", config.environment);
    }
    if config.security.enable_ip_filter && config.security.ip_allowlist.is_empty() {
        tracing::warn!("IP filter enabled with an empty allow-list; every request will be rejected");
    }

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config).context("failed to build outbound HTTP client")?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Zoom API gateway listening on http://{}", bind_addr);

    axum::serve(listener, app(state).into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
