//! FFprobe adapter for media file probing
//!
//! Runs the `ffprobe` executable and reads the container duration.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;
use crate::domain::time::Seconds;
use crate::ports::*;

/// FFprobe-based probe adapter
#[derive(Debug, Clone)]
pub struct FFprobeAdapter {
    program: PathBuf,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter running `program`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Parse the single-value output of `-show_entries format=duration`
    pub fn parse_duration(stdout: &str) -> Result<Seconds, DomainError> {
        let value = stdout.trim();
        let duration: Seconds = value
            .parse()
            .map_err(|_| DomainError::ProbeFail(format!("Unexpected ffprobe duration: '{}'", value)))?;

        if !duration.is_finite() || duration < 0.0 {
            return Err(DomainError::ProbeFail(format!(
                "Unexpected ffprobe duration: '{}'",
                value
            )));
        }
        Ok(duration)
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_duration(&self, file_path: &Path) -> Result<Seconds, DomainError> {
        debug!("Probing {} with {}", file_path.display(), self.program.display());

        let output = Command::new(&self.program)
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(file_path)
            .output()
            .await
            .map_err(|e| {
                DomainError::ProbeFail(format!(
                    "Failed to run {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(DomainError::ProbeFail(format!(
                "ffprobe exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Self::parse_duration(&String::from_utf8_lossy(&output.stdout))
    }
}
