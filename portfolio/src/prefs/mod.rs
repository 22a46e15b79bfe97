//! Preference storage for the single persisted page setting (the theme).

mod backend;
mod json;
mod memory;

pub use backend::PreferenceBackend;
pub use json::JsonFileBackend;
pub use memory::MemoryBackend;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
