//! Error types for results handling.

use thiserror::Error;

/// Errors that can occur while exporting results.
#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ResultsResult<T> = Result<T, ResultsError>;
