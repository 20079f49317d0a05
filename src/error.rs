//! Error types
//!
//! Store operations themselves never fail; these cover the storage backend,
//! the persisted envelope, and the question-bank tools.

use std::path::PathBuf;

/// Key/value storage backend failures
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("Storage operation failed for key '{key}': {message}")]
    Operation { key: String, message: String },
}

/// Persisted envelope encode/decode failures
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("Failed to encode persisted state: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode persisted state: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Persisted state version {found} does not match expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

/// Question-bank tool failures
#[derive(Debug, thiserror::Error)]
pub enum QuestionBankError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{file}': {message}")]
    Parse { file: String, message: String },

    #[error("'{file}' is not a JSON array of questions")]
    NotAnArray { file: String },
}
