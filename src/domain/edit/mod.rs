// Field-level time editing - range checks for an hours/minutes/seconds editor

use std::fmt;

use thiserror::Error;

use crate::domain::time::{to_components, to_seconds, Seconds, TimeError};

/// One field of an hours:minutes:seconds editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Hours => write!(f, "hours"),
            TimeField::Minutes => write!(f, "minutes"),
            TimeField::Seconds => write!(f, "seconds"),
        }
    }
}

/// Rejected field edit or timestamp
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Please enter a valid number")]
    NotANumber,

    #[error("Please enter a non-negative integer for hours.")]
    Hours,

    #[error("Please enter a non-negative integer between 0 and 59 for minutes.")]
    Minutes,

    #[error("Please enter a non-negative number between 0 and 60 for seconds.")]
    Seconds,

    #[error("Invalid time format: '{0}'. Expected seconds, MM:SS or HH:MM:SS (fraction allowed on seconds)")]
    Format(String),

    #[error(transparent)]
    Time(#[from] TimeError),
}

fn is_non_negative_integer(value: f64) -> bool {
    value >= 0.0 && value.fract() == 0.0
}

/// Check `value` against the range of `field`
pub fn check_field(field: TimeField, value: f64) -> Result<(), FieldError> {
    if !value.is_finite() {
        return Err(FieldError::NotANumber);
    }

    match field {
        TimeField::Hours if !is_non_negative_integer(value) => Err(FieldError::Hours),
        TimeField::Minutes if !is_non_negative_integer(value) || value > 59.0 => {
            Err(FieldError::Minutes)
        }
        TimeField::Seconds if !(0.0..60.0).contains(&value) => Err(FieldError::Seconds),
        _ => Ok(()),
    }
}

/// Replace one field of `current` and return the new seconds value.
///
/// The other two fields keep the values [`to_components`] gives for `current`.
pub fn edit_field(current: Seconds, field: TimeField, value: f64) -> Result<Seconds, FieldError> {
    check_field(field, value)?;

    let mut components = to_components(current)?;
    match field {
        TimeField::Hours => components.hours = value as u64,
        TimeField::Minutes => components.minutes = value as u32,
        TimeField::Seconds => components.seconds = value,
    }

    Ok(to_seconds(&components))
}

fn parse_segment(text: &str, segment: &str) -> Result<f64, FieldError> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Err(FieldError::Format(text.to_string()));
    }
    segment.parse::<f64>().map_err(|_| FieldError::NotANumber)
}

/// Parse `SS[.f]`, `MM:SS[.f]` or `HH:MM:SS[.f]` into seconds.
///
/// A bare number may exceed 60. Colon-separated segments go through
/// [`edit_field`] one at a time, so each obeys its field's range.
pub fn parse_timestamp(text: &str) -> Result<Seconds, FieldError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Format(text.to_string()));
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    let fields: &[TimeField] = match parts.len() {
        1 => {
            let seconds = parse_segment(text, parts[0])?;
            if !seconds.is_finite() {
                return Err(FieldError::NotANumber);
            }
            if seconds < 0.0 {
                return Err(FieldError::Time(TimeError::InvalidInput { value: seconds }));
            }
            return Ok(seconds);
        }
        2 => &[TimeField::Minutes, TimeField::Seconds],
        3 => &[TimeField::Hours, TimeField::Minutes, TimeField::Seconds],
        _ => return Err(FieldError::Format(text.to_string())),
    };

    let mut time = 0.0;
    for (field, segment) in fields.iter().zip(parts) {
        let value = parse_segment(text, segment)?;
        time = edit_field(time, *field, value)?;
    }
    Ok(time)
}
