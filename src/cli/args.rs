//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the trim command
#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Start time (seconds, MM:SS[.f] or HH:MM:SS[.f])
    #[arg(short, long, allow_hyphen_values = true)]
    pub start: String,

    /// End time (seconds, MM:SS[.f] or HH:MM:SS[.f])
    #[arg(short, long, allow_hyphen_values = true)]
    pub end: String,

    /// Output file path (default: trimmed_<start>_to_<end>s_<input name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the plan without running ffmpeg
    #[arg(long)]
    pub dry_run: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Start time (seconds, MM:SS[.f] or HH:MM:SS[.f])
    #[arg(short, long, allow_hyphen_values = true)]
    pub start: String,

    /// End time (seconds, MM:SS[.f] or HH:MM:SS[.f])
    #[arg(short, long, allow_hyphen_values = true)]
    pub end: String,

    /// Known media duration in seconds (0 = unknown)
    #[arg(short, long, conflicts_with = "input")]
    pub duration: Option<f64>,

    /// Read the media duration from this file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the time command
#[derive(Args, Debug)]
pub struct TimeArgs {
    /// Time value (seconds, MM:SS[.f] or HH:MM:SS[.f])
    pub time: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
