mod config;
mod errors;
mod hr_client;
mod identity;
mod models;
mod records;
mod routes;
mod state;
mod views;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::hr_client::{Endpoints, HttpHrClient};
use crate::routes::build_router;
use crate::state::AppState;
use crate::views::Views;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing credentials)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ESS portal v{}", env!("CARGO_PKG_VERSION"));

    let endpoints = Endpoints::from_base(&config.hr_api_base_url);
    let hr = HttpHrClient::new(&config)?;
    info!(
        base_url = %config.hr_api_base_url,
        timeout_secs = config.hr_api_timeout_secs,
        "HR API client initialized"
    );

    let views = Views::new()?;
    info!("Page templates registered");

    let state = AppState {
        hr: Arc::new(hr),
        endpoints: Arc::new(endpoints),
        views: Arc::new(views),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
