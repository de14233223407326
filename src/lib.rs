pub mod config;
pub mod error;
pub mod export;
pub mod http;
pub mod prompts;
pub mod store;

pub use config::Config;
pub use error::Error;
pub use http::{create_router, AppState};
pub use store::{Recording, RecordingStore, StoreStats};
