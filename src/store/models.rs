use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One persisted recording: the prompt shown at capture time, the raw
/// encoded audio bytes, and a store-assigned id and timestamp.
#[derive(Debug, Clone, FromRow)]
pub struct Recording {
    pub id: i64,
    pub prompt: String,
    pub audio: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate statistics over the recordings table.
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub total_recordings: i64,
    pub total_audio_bytes: i64,
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
}
