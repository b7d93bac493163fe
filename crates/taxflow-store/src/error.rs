//! Storage errors

use std::path::PathBuf;

/// Errors surfaced by a [`crate::KeyValueStore`] backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying file I/O failed
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        /// File the backend was reading or writing
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The on-disk document is not valid JSON
    #[error("storage document corrupt at {path}: {source}")]
    Corrupt {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// In-memory entries could not be serialized for writing
    #[error("storage document encode failed for {path}: {source}")]
    Encode {
        /// File the backend was about to write
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Wrap an I/O error with the file it concerned
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
