use crate::store::RecordingStore;
use std::path::PathBuf;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Recording store, cloned per handler (pool-backed)
    pub store: RecordingStore,

    /// Prompt file, re-read on every /api/prompt request
    pub prompts_file: PathBuf,
}

impl AppState {
    pub fn new(store: RecordingStore, prompts_file: impl Into<PathBuf>) -> Self {
        Self {
            store,
            prompts_file: prompts_file.into(),
        }
    }
}
