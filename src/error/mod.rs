//! Error handling module for ClipCut

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for ClipCut operations
#[derive(Error, Debug)]
pub enum ClipCutError {
    /// Domain rule or port failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Writing command output failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for ClipCut operations
pub type ClipCutResult<T> = std::result::Result<T, ClipCutError>;
