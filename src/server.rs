//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, AppConfig};
use crate::services::{AnalysisService, HttpImageFetcher, ImageFetcher};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analysis: Arc<AnalysisService>,
}

impl AppState {
    /// Build state around a specific image fetcher.
    pub fn with_fetcher(config: Arc<AppConfig>, fetcher: Arc<dyn ImageFetcher>) -> Self {
        let analysis = Arc::new(AnalysisService::new(&config.analysis, fetcher));
        Self { config, analysis }
    }
}

/// Create application state with the HTTP image fetcher.
pub fn create_app_state(config: Arc<AppConfig>) -> anyhow::Result<AppState> {
    let fetcher = HttpImageFetcher::new(&config.fetch)
        .map_err(|e| anyhow::anyhow!("Failed to create image fetcher: {e}"))?;
    Ok(AppState::with_fetcher(config, Arc::new(fetcher)))
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_bytes;

    Router::new()
        .route("/api/analyze", post(handle_analyze))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        // Inline base64 images exceed axum's 2 MB default
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

async fn handle_analyze(
    State(state): State<AppState>,
    request: Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    api::handle_analyze(State(state.analysis), request).await
}
