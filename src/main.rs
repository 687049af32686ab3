//! ClipCut video trimmer
//!
//! Cuts the segment between two timestamps out of a video file with a
//! stream copy. The cut itself is done by ffmpeg; this binary validates the
//! selection and builds the ffmpeg arguments.
//!
//! # Usage
//!
//! ```bash
//! clipcut trim --input video.mp4 --start 00:01:00 --end 00:02:30.5
//! clipcut check --start 10 --end 25 --duration 30
//! clipcut inspect --input video.mp4
//! clipcut time 3661.5
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use clipcut::app::DefaultAppContainer;
use clipcut::cli::{commands, Cli, Commands};
use clipcut::config::AppConfig;
use clipcut::utils::logging::init_logging;

/// Main entry point for the ClipCut application
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let overrides = cli.config_overrides()?;
    let config = AppConfig::load(cli.config.as_deref(), overrides)
        .context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log_level, config.log_format)?;
    info!("Starting ClipCut {}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let container = DefaultAppContainer::new(&config);

    // Execute the requested command
    match cli.command {
        Commands::Trim(args) => {
            info!("Executing trim command");
            let ffmpeg = config.ffmpeg_path.display().to_string();
            commands::trim(args, &container, &ffmpeg).await?;
        }
        Commands::Check(args) => {
            info!("Executing check command");
            commands::check(args, &container).await?;
        }
        Commands::Inspect(args) => {
            info!("Executing inspect command");
            commands::inspect(args, &container).await?;
        }
        Commands::Time(args) => {
            commands::time(args)?;
        }
        Commands::Config => {
            commands::show_config(&config)?;
        }
    }

    Ok(())
}
