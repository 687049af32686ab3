// Time conversion - seconds <-> hours/minutes/seconds and HH:MM:SS formatting

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Elapsed duration or timeline position, meaningful to one decimal place
pub type Seconds = f64;

/// Number of decimal places kept for sub-second values
pub const PRECISION: i32 = 1;

const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Errors raised by the conversion functions
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TimeError {
    /// Negative, NaN or infinite seconds value
    #[error("Invalid time value: {value} (expected a non-negative, finite number of seconds)")]
    InvalidInput { value: f64 },
}

/// A seconds value decomposed for display and editing.
///
/// `minutes` is in `[0, 59]` and `seconds` in `[0, 60)` when produced by
/// [`to_components`]. Values built by hand are taken as-is; nothing here
/// carries overflowing fields into the next unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeComponents {
    pub hours: u64,
    pub minutes: u32,
    pub seconds: f64,
}

impl TimeComponents {
    pub fn new(hours: u64, minutes: u32, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Decompose a seconds value
    pub fn from_seconds(time: Seconds) -> Result<Self, TimeError> {
        to_components(time)
    }

    /// Recombine into a flat seconds value
    pub fn as_seconds(&self) -> Seconds {
        to_seconds(self)
    }
}

impl fmt::Display for TimeComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:", self.hours, self.minutes)?;
        if self.seconds.fract() == 0.0 {
            write!(f, "{:02}", self.seconds as u64)
        } else {
            write!(f, "{:04.1}", self.seconds)
        }
    }
}

/// Round to `decimals` places, ties away from zero
pub fn round_to_precision(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Reject negative, NaN and infinite values. `-0.0` comes back as `0.0`.
pub fn check_seconds(time: Seconds) -> Result<Seconds, TimeError> {
    if !time.is_finite() || time < 0.0 {
        return Err(TimeError::InvalidInput { value: time });
    }
    Ok(time + 0.0)
}

/// Split a seconds value into hours, minutes and seconds.
///
/// Hours are unbounded. Seconds are rounded to [`PRECISION`]; when that
/// rounding reaches 60 the excess is carried into minutes (and hours) so the
/// result always stays inside its declared ranges.
pub fn to_components(time: Seconds) -> Result<TimeComponents, TimeError> {
    let time = check_seconds(time)?;

    let mut hours = (time / SECONDS_PER_HOUR).floor() as u64;
    let mut minutes = ((time % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE).floor() as u32;
    let mut seconds = round_to_precision(time % SECONDS_PER_MINUTE, PRECISION);

    if seconds >= SECONDS_PER_MINUTE {
        seconds = round_to_precision(seconds - SECONDS_PER_MINUTE, PRECISION);
        minutes += 1;
        if minutes == 60 {
            minutes = 0;
            hours += 1;
        }
    }

    Ok(TimeComponents {
        hours,
        minutes,
        seconds,
    })
}

/// `hours * 3600 + minutes * 60 + seconds`, no range checks
pub fn to_seconds(components: &TimeComponents) -> Seconds {
    components.hours as f64 * SECONDS_PER_HOUR
        + components.minutes as f64 * SECONDS_PER_MINUTE
        + components.seconds
}

/// Render as `HH:MM:SS`, or `HH:MM:SS.f` when a tenth of a second remains.
///
/// This is also the literal seek/duration argument handed to ffmpeg.
pub fn format_time(time: Seconds) -> Result<String, TimeError> {
    Ok(to_components(time)?.to_string())
}

/// `end - start` rounded to [`PRECISION`]. Negative results are returned as-is.
pub fn time_diff(start: Seconds, end: Seconds) -> Seconds {
    round_to_precision(end - start, PRECISION)
}
