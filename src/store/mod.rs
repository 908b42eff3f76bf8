pub mod auth;
pub mod live;
pub mod records;

use std::path::PathBuf;

use thiserror::Error;

/// Failures talking to the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no record with id {0}")]
    MissingRecord(String),
}

/// Root directory of the document store.
///
/// `HABITDESK_DIR` overrides the default (useful for scratch stores);
/// otherwise the platform data dir, falling back to /tmp when the
/// environment provides neither.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("HABITDESK_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("habitdesk")
}
