use super::state::AppState;
use crate::error::{Error, Result};
use crate::prompts;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::info;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SaveRecordingRequest {
    /// Prompt shown to the user at capture time (default: "unknown")
    pub prompt_text: Option<String>,

    /// Data-URL payload: "<metadata prefix>,<base64 audio>"
    pub audio_data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveRecordingResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_recordings: i64,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/prompt
/// Return a random prompt from the prompt file
pub async fn get_prompt(State(state): State<AppState>) -> Result<Json<PromptResponse>> {
    let prompts = prompts::load_prompts(&state.prompts_file)?;

    match prompts::random_prompt(&prompts) {
        Some(text) => Ok(Json(PromptResponse { text: text.clone() })),
        // Only reachable when the file exists but holds no prompts
        None => Err(Error::NoPrompts),
    }
}

/// POST /api/save-recording
/// Decode a data-URL audio payload and persist it with its prompt
pub async fn save_recording(
    State(state): State<AppState>,
    Json(req): Json<SaveRecordingRequest>,
) -> Result<Json<SaveRecordingResponse>> {
    let prompt_text = req.prompt_text.unwrap_or_else(|| "unknown".to_string());

    let audio_data = match req.audio_data {
        Some(data) if !data.is_empty() => data,
        _ => return Err(Error::MissingAudio),
    };

    let audio_bytes = decode_data_url(&audio_data)?;
    // A data URL with an empty base64 tail decodes to zero bytes; the
    // store must never hold an empty audio blob
    if audio_bytes.is_empty() {
        return Err(Error::MissingAudio);
    }

    let id = state.store.insert(&prompt_text, &audio_bytes).await?;
    info!(id, bytes = audio_bytes.len(), "Recording saved");

    Ok(Json(SaveRecordingResponse {
        success: true,
        message: "Recording saved successfully".to_string(),
    }))
}

/// GET /api/stats
/// Total recording count, computed fresh per call
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let total_recordings = state.store.count().await?;

    Ok(Json(StatsResponse { total_recordings }))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Decode the base64 tail of a data URL ("<prefix>,<base64>").
fn decode_data_url(data: &str) -> Result<Vec<u8>> {
    let (_, payload) = data.split_once(',').ok_or_else(|| {
        Error::InvalidPayload("expected a data URL with a comma separator".to_string())
    })?;

    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}
