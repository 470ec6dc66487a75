//! Error types for the storage boundary, document import, and tracker operations.
//!
//! Every failure the data access layer can report is an ordinary value of one
//! of these enums. Nothing in the library panics on bad input or bad storage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](crate::storage::KeyValueStore) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O failed for key '{key}' at {}: {source}", path.display())]
    Io {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped to a storage location.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// Reasons an imported document is rejected.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The text is not valid JSON.
    #[error("import is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The top-level JSON value is not an object.
    #[error("import must be a JSON object")]
    NotAnObject,

    /// A required top-level field is absent, null, or empty.
    #[error("import is missing required field '{0}'")]
    MissingField(&'static str),

    /// A field is present but has the wrong type or shape.
    #[error("import has an invalid shape: {0}")]
    InvalidShape(#[source] serde_json::Error),
}

/// Errors returned by [`ExamTracker`](crate::tracker::ExamTracker) operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("config not found: {0}")]
    ConfigNotFound(String),

    /// Built-in configs cannot be deleted.
    #[error("config '{0}' is a default config and cannot be deleted")]
    ProtectedConfig(String),

    #[error("result not found: {0}")]
    ResultNotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl TrackerError {
    /// Returns `true` if the error means the target id does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TrackerError::ConfigNotFound(_) | TrackerError::ResultNotFound(_)
        )
    }
}
