// Domain errors - Error types for the domain layer

use thiserror::Error;

use crate::domain::time::TimeError;
use crate::domain::validation::ValidationError;

/// Domain-specific error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Media probing failed
    #[error("Probe failed: {0}")]
    ProbeFail(String),

    /// Output would clobber an existing file
    #[error("Output file already exists: {0} (use --overwrite always to replace it)")]
    OutputExists(String),

    /// External trim process failed
    #[error("Trim failed: {0}")]
    ExecFail(String),

    /// File system failure
    #[error("File system error: {0}")]
    FsFail(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    ConfigFail(String),

    /// Selection rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed time value
    #[error(transparent)]
    Time(#[from] TimeError),
}
