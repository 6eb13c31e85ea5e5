//! Error types for the simulation engine.

use thiserror::Error;
use wc_core::CoreError;

/// Result type for engine operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors raised at the engine's I/O and content seams.
///
/// Verb operations never return these; they answer with narration instead.
#[derive(Debug, Error)]
pub enum FictionError {
    /// Reading or writing a save file failed.
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A save document could not be encoded or decoded.
    #[error("save document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A decoded snapshot does not fit the catalog it is loaded against.
    #[error("snapshot rejected: {0}")]
    Snapshot(String),

    /// Catalog error.
    #[error(transparent)]
    Core(#[from] CoreError),
}
