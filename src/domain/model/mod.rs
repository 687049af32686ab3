// Domain models - Trim plan, report and supporting types

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::selection::Selection;
use crate::domain::time::{format_time, Seconds};

/// What to do when the output file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Leave existing files alone and fail
    #[default]
    Never,
    /// Replace existing files
    Always,
}

impl OverwritePolicy {
    /// Parse overwrite policy from string
    pub fn parse(policy_str: &str) -> Result<Self, DomainError> {
        match policy_str.to_lowercase().as_str() {
            "never" | "no" => Ok(OverwritePolicy::Never),
            "always" | "yes" => Ok(OverwritePolicy::Always),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid overwrite policy: {}. Valid policies: never, always",
                policy_str
            ))),
        }
    }

    fn flag(&self) -> &'static str {
        match self {
            OverwritePolicy::Never => "-n",
            OverwritePolicy::Always => "-y",
        }
    }
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverwritePolicy::Never => write!(f, "never"),
            OverwritePolicy::Always => write!(f, "always"),
        }
    }
}

/// What is known about an input file before trimming
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaInfo {
    pub path: PathBuf,
    pub file_size: u64,
    /// 0 when the duration could not be determined
    pub duration: Seconds,
}

impl MediaInfo {
    pub fn size_mb(&self) -> f64 {
        self.file_size as f64 / 1024.0 / 1024.0
    }

    pub fn is_duration_known(&self) -> bool {
        self.duration > 0.0
    }
}

/// A validated selection turned into the arguments of a stream-copy cut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrimPlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub selection: Selection,
    /// Seek offset, `HH:MM:SS[.f]`
    pub seek: String,
    /// Clip length, `HH:MM:SS[.f]`
    pub length: String,
    pub overwrite: OverwritePolicy,
}

impl TrimPlan {
    /// Build a plan, refusing selections that do not validate
    pub fn from_selection(
        selection: Selection,
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        overwrite: OverwritePolicy,
    ) -> Result<Self, DomainError> {
        selection.validate()?;

        let seek = format_time(selection.start)?;
        let length = format_time(selection.clip_length())?;

        Ok(Self {
            input: input.into(),
            output: output.into(),
            selection,
            seek,
            length,
            overwrite,
        })
    }

    /// Argument list for the ffmpeg executable
    pub fn ffmpeg_args(&self) -> Vec<String> {
        vec![
            self.overwrite.flag().to_string(),
            "-ss".to_string(),
            self.seek.clone(),
            "-i".to_string(),
            self.input.to_string_lossy().to_string(),
            "-to".to_string(),
            self.length.clone(),
            "-c".to_string(),
            "copy".to_string(),
            self.output.to_string_lossy().to_string(),
        ]
    }
}

/// Result of running a trim
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrimReport {
    pub output: PathBuf,
    pub file_size: u64,
    pub processing_time: Duration,
}

/// Render a seconds value for a file name: shortest decimal form, `.` as `_`
fn seconds_for_filename(seconds: Seconds) -> String {
    seconds.to_string().replace('.', "_")
}

/// Default name of the trimmed file, e.g. `trimmed_1_5_to_10s_clip.mp4`
pub fn output_file_name(input: &Path, selection: &Selection) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "video.mp4".to_string());

    let name = if Path::new(&name).extension().is_some() {
        name
    } else {
        format!("{}.mp4", name)
    };

    format!(
        "trimmed_{}_to_{}s_{}",
        seconds_for_filename(selection.start),
        seconds_for_filename(selection.end),
        name
    )
}

/// Full default output path: `output_dir` when given, else next to the input
pub fn default_output_path(input: &Path, selection: &Selection, output_dir: Option<&Path>) -> PathBuf {
    let file_name = output_file_name(input, selection);
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input
            .parent()
            .map(|parent| parent.join(&file_name))
            .unwrap_or_else(|| PathBuf::from(&file_name)),
    }
}
