//! API Server for the task service
//!
//! Serves the task REST API over volatile, process-local storage.
//! The listening address comes from `TASKS_HOST` / `TASKS_PORT` (or `PORT`).

mod config;
mod error;
mod routes;
mod state;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, DEFAULT_LOG_FILTER};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let app = routes::app(AppState::new());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("REST API listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
