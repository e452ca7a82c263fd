//! Error types for piece counting.

use std::path::PathBuf;

/// Errors that can occur while loading detections.
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    /// The detections file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The detections file is not valid detection JSON.
    #[error("invalid detections in {path}: {source}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// No detections file exists for the image.
    #[error("no detections found for {0}")]
    MissingDetections(PathBuf),
}

/// Convenience result type for counting operations.
pub type CounterResult<T> = Result<T, CounterError>;
