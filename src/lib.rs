//! ClipCut Video Trimmer Library
//!
//! Time conversion, selection validation and the ffmpeg plumbing behind the
//! `clipcut` command-line trimmer.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::edit::{edit_field, parse_timestamp, FieldError, TimeField};
pub use domain::errors::DomainError;
pub use domain::model::{OverwritePolicy, TrimPlan, TrimReport};
pub use domain::selection::Selection;
pub use domain::time::{
    format_time, time_diff, to_components, to_seconds, Seconds, TimeComponents, TimeError,
};
pub use domain::validation::{validate, ValidationError, ValidationReport};
pub use error::{ClipCutError, ClipCutResult};
