//! FFmpeg execution adapter
//!
//! Performs the cut by running the `ffmpeg` executable with the plan's
//! argument list.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Lines of ffmpeg stderr kept in error messages
const STDERR_TAIL_LINES: usize = 5;

/// FFmpeg-based execution adapter
#[derive(Debug, Clone)]
pub struct FFmpegAdapter {
    program: PathBuf,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter running `program`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn stderr_tail(stderr: &str) -> String {
        let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
        let skip = lines.len().saturating_sub(STDERR_TAIL_LINES);
        lines[skip..].join("\n")
    }
}

#[async_trait]
impl ExecutePort for FFmpegAdapter {
    async fn execute_plan(&self, plan: &TrimPlan) -> Result<TrimReport, DomainError> {
        let args = plan.ffmpeg_args();
        debug!("{} {}", self.program.display(), args.join(" "));

        let started = Instant::now();
        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                DomainError::ExecFail(format!("Failed to run {}: {}", self.program.display(), e))
            })?;
        let processing_time = started.elapsed();

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines() {
            debug!(target: "clipcut::ffmpeg", "{}", line);
        }

        if !output.status.success() {
            return Err(DomainError::ExecFail(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                Self::stderr_tail(&stderr)
            )));
        }

        let file_size = tokio::fs::metadata(&plan.output)
            .await
            .map(|m| m.len())
            .map_err(|e| {
                DomainError::ExecFail(format!(
                    "ffmpeg reported success but {} is unreadable: {}",
                    plan.output.display(),
                    e
                ))
            })?;

        info!(
            "Trimmed {} in {:.2}s",
            plan.output.display(),
            processing_time.as_secs_f64()
        );

        Ok(TrimReport {
            output: plan.output.clone(),
            file_size,
            processing_time,
        })
    }
}
