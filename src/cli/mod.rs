//! CLI module for ClipCut
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::PartialConfig;
use crate::domain::errors::DomainError;
use crate::domain::model::OverwritePolicy;
use crate::utils::logging::LogFormat;

pub mod args;
pub mod commands;

/// ClipCut video trimmer
///
/// Pick a start and end timestamp and get a stream-copied clip of the input.
#[derive(Parser, Debug)]
#[command(name = "clipcut")]
#[command(about = "ClipCut - trim a video between two timestamps")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file (TOML, `[clipcut]` table)
    #[arg(long, global = true, env = "CLIPCUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "CLIPCUT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log format (pretty, compact, json)
    #[arg(long, global = true, env = "CLIPCUT_LOG_FORMAT")]
    pub log_format: Option<String>,

    /// ffmpeg executable
    #[arg(long, global = true, env = "CLIPCUT_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// ffprobe executable
    #[arg(long, global = true, env = "CLIPCUT_FFPROBE")]
    pub ffprobe: Option<PathBuf>,

    /// Overwrite behavior for existing output files (never, always)
    #[arg(long, global = true, env = "CLIPCUT_OVERWRITE")]
    pub overwrite: Option<String>,

    /// Directory for generated output file names
    #[arg(long, global = true, env = "CLIPCUT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration layer given on the command line or through the environment
    pub fn config_overrides(&self) -> Result<PartialConfig, DomainError> {
        Ok(PartialConfig {
            ffmpeg_path: self.ffmpeg.clone(),
            ffprobe_path: self.ffprobe.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.as_deref().map(LogFormat::parse).transpose()?,
            overwrite: self.overwrite.as_deref().map(OverwritePolicy::parse).transpose()?,
            output_dir: self.output_dir.clone(),
        })
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cut a segment out of a video file
    Trim(args::TrimArgs),
    /// Check a start/end selection without trimming
    Check(args::CheckArgs),
    /// Show size and duration of a video file
    Inspect(args::InspectArgs),
    /// Convert a time value and show its HH:MM:SS form
    Time(args::TimeArgs),
    /// Print the effective configuration as TOML
    Config,
}
