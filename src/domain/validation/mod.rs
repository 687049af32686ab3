// Selection validation - classify a (start, end, duration) triplet

use serde::Serialize;
use thiserror::Error;

use crate::domain::time::Seconds;

/// The single reason a selection cannot be trimmed.
///
/// Messages are user-facing and shown verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    #[error("Times cannot be negative.")]
    NegativeTime,

    #[error("End time must be greater than start time.")]
    StartNotBeforeEnd,

    #[error("End time cannot exceed video duration ({duration:.1}s).")]
    EndExceedsDuration { duration: Seconds },
}

impl ValidationError {
    /// Stable identifier used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::NegativeTime => "negative_time",
            ValidationError::StartNotBeforeEnd => "start_not_before_end",
            ValidationError::EndExceedsDuration { .. } => "end_exceeds_duration",
        }
    }
}

/// Check a selection. Rules are tried in order and the first failure wins:
///
/// 1. either bound negative
/// 2. `start >= end`
/// 3. `end > duration`, only when the duration is known (`duration > 0`)
pub fn validate(start: Seconds, end: Seconds, duration: Seconds) -> Result<(), ValidationError> {
    if start < 0.0 || end < 0.0 {
        return Err(ValidationError::NegativeTime);
    }

    if start >= end {
        return Err(ValidationError::StartNotBeforeEnd);
    }

    if duration > 0.0 && end > duration {
        return Err(ValidationError::EndExceedsDuration { duration });
    }

    Ok(())
}

/// Serializable outcome of [`validate`] for reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub start: Seconds,
    pub end: Seconds,
    pub duration: Seconds,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationReport {
    pub fn new(start: Seconds, end: Seconds, duration: Seconds) -> Self {
        let outcome = validate(start, end, duration);
        Self {
            start,
            end,
            duration,
            valid: outcome.is_ok(),
            error: outcome.err().map(|e| e.kind().to_string()),
            message: outcome.err().map(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests;
