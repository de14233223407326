use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Data collection API
        .route("/api/prompt", get(handlers::get_prompt))
        .route("/api/save-recording", post(handlers::save_recording))
        .route("/api/stats", get(handlers::get_stats))
        // Recording front-end (static content)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/complete", ServeFile::new(static_dir.join("complete.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
