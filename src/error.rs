//! Typed failures for the ingestion and export pipeline.
//!
//! Each variant maps to a specific HTTP status at the request boundary;
//! the export tool reports them at top level and exits nonzero.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing audio data")]
    MissingAudio,

    #[error("Invalid audio payload: {0}")]
    InvalidPayload(String),

    #[error("Failed to decode audio payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("No prompts available")]
    NoPrompts,

    #[error("Failed to read prompts file: {0}")]
    PromptSource(#[source] std::io::Error),

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingAudio | Error::InvalidPayload(_) | Error::Decode(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::NoPrompts => StatusCode::NOT_FOUND,
            Error::PromptSource(_) | Error::Store(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
