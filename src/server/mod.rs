//! HTTP boundary: router, shared state, and server startup

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use eyre::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::GenerateResponse;

use crate::config::Config;
use crate::generate::Generator;
use crate::session::SessionStore;

/// Request body cap; uploads are buffered in memory before extraction
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<Generator>,
    pub sessions: Arc<SessionStore>,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(handlers::generate))
        .route("/export/{format}", get(handlers::export))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(state: AppState) -> Result<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    info!(%addr, "server listening");

    axum::serve(listener, router(state)).await.context("Server error")?;
    Ok(())
}
