// error.rs — Error types for the persistence layer.

use thiserror::Error;

use gk_core::GoalError;

/// Errors that can occur while loading or saving a goals file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The goals file is not valid JSON for the expected layout.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The goals file decoded but violates a model invariant
    /// (e.g. two goals with the same name and frequency).
    #[error("corrupt goals file: {0}")]
    Corrupt(#[from] GoalError),
}
