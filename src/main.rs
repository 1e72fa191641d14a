//! Headline Analyzer — Binary Entrypoint
//! Boots the Axum HTTP server: config from env, tracing, lexicons, metrics, routes.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use headline_analyzer::api::{self, AppState};
use headline_analyzer::config::{AppConfig, LogFormat};
use headline_analyzer::metrics::Metrics;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("headline_analyzer=info,analysis=info,api=info,tower_http=info")
    });

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when the file is absent.
    let _ = dotenvy::dotenv();

    let cfg = AppConfig::from_env()?;
    init_tracing(cfg.log_format);

    let lexicons = cfg.load_lexicons()?;
    let metrics = Metrics::init()?;

    let app = api::create_router(AppState::new(lexicons)).merge(metrics.router());

    let addr = cfg.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}
