// Selection - the start/end trim points of one editing session

use serde::Serialize;

use crate::domain::time::{time_diff, Seconds};
use crate::domain::validation::{validate, ValidationError};

/// Start/end trim points plus the media duration (0 until known)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Selection {
    pub start: Seconds,
    pub end: Seconds,
    pub duration: Seconds,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(start: Seconds, end: Seconds) -> Self {
        Self {
            start,
            end,
            duration: 0.0,
        }
    }

    pub fn set_start(&mut self, start: Seconds) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Seconds) {
        self.end = end;
    }

    /// Record the media duration once metadata is available; the end
    /// bound snaps to the full length.
    pub fn media_loaded(&mut self, duration: Seconds) {
        self.duration = duration;
        self.end = duration;
    }

    /// Record the duration without touching either bound
    pub fn set_duration(&mut self, duration: Seconds) {
        self.duration = duration;
    }

    pub fn is_duration_known(&self) -> bool {
        self.duration > 0.0
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self.start, self.end, self.duration)
    }

    /// Length of the clip, rounded to a tenth of a second
    pub fn clip_length(&self) -> Seconds {
        time_diff(self.start, self.end)
    }

    /// One-line preview of the selected range
    pub fn preview(&self) -> String {
        if self.start < self.end {
            format!("duration: {}s", self.clip_length())
        } else {
            "Start time must be less than end time.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let selection = Selection::new();
        assert_eq!(selection.start, 0.0);
        assert_eq!(selection.end, 0.0);
        assert!(!selection.is_duration_known());
        assert_eq!(selection.validate(), Err(ValidationError::StartNotBeforeEnd));
    }

    #[test]
    fn test_media_loaded_moves_end() {
        let mut selection = Selection::new();
        selection.media_loaded(42.7);
        assert_eq!(selection.end, 42.7);
        assert_eq!(selection.duration, 42.7);
        assert!(selection.validate().is_ok());
    }

    #[test]
    fn test_revalidates_after_each_edit() {
        let mut selection = Selection::new();
        selection.media_loaded(30.0);

        selection.set_end(50.0);
        assert_eq!(
            selection.validate(),
            Err(ValidationError::EndExceedsDuration { duration: 30.0 })
        );

        selection.set_end(20.0);
        assert!(selection.validate().is_ok());

        selection.set_start(-1.0);
        assert_eq!(selection.validate(), Err(ValidationError::NegativeTime));
    }

    #[test]
    fn test_preview() {
        let selection = Selection::with_bounds(10.0, 25.0);
        assert_eq!(selection.preview(), "duration: 15s");

        let selection = Selection::with_bounds(1.2, 3.5);
        assert_eq!(selection.preview(), "duration: 2.3s");

        let selection = Selection::with_bounds(5.0, 5.0);
        assert_eq!(selection.preview(), "Start time must be less than end time.");
    }
}
