//! Error types for loading, importing, and saving tables.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing table data.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The payload is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is JSON but not in the table file shape.
    #[error("malformed table data: {0}")]
    MalformedImportPayload(String),

    /// Reading or writing the store file failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
