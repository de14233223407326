//! HTTP API for the recording front-end
//!
//! This module provides the REST surface for prompt delivery and
//! recording ingestion:
//! - GET /api/prompt - Fetch a random prompt
//! - POST /api/save-recording - Submit a base64 data-URL recording
//! - GET /api/stats - Total recording count
//! - GET /health - Health check
//!
//! The recording UI itself is static content served from disk.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
