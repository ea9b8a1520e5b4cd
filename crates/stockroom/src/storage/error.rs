//! Error types for the persistence layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the inventory file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file exists but does not hold a valid inventory document.
    #[error("Malformed inventory file {}: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },

    /// The file or its directory could not be read or written.
    #[error("Cannot access inventory file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory inventory could not be encoded.
    #[error("Cannot encode inventory: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StorageError {
    pub(crate) fn format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        StorageError::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}
