//! Heart-Disease Risk Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, middleware,
//! and the static form UI.

use std::net::{Ipv4Addr, SocketAddr};

use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use heart_risk_api::api::{self, AppState};
use heart_risk_api::config::ServerConfig;
use heart_risk_api::metrics::Metrics;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("heart_risk_api=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = ServerConfig::load()?;
    let metrics = Metrics::init();

    let state = AppState::new(cfg.history_capacity);
    let app = api::router(state)
        .merge(metrics.router())
        .fallback_service(ServeDir::new(&cfg.static_dir));

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, cfg.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(port = cfg.port, "heart-disease risk service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
