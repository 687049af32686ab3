//! Command implementations

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::adapters::TomlConfigAdapter;
use crate::app::{AppContainer, TrimRequest, TrimResponse};
use crate::cli::args::{CheckArgs, InspectArgs, TimeArgs, TrimArgs};
use crate::config::AppConfig;
use crate::domain::edit::{parse_timestamp, FieldError};
use crate::domain::model::MediaInfo;
use crate::domain::selection::Selection;
use crate::domain::time::{check_seconds, format_time, to_components, Seconds, TimeComponents};
use crate::domain::validation::ValidationReport;
use crate::error::ClipCutResult;

/// Parse a selection bound.
///
/// Plain numbers are taken as-is, negative ones included, so that the
/// selection check reports them; anything else goes through
/// [`parse_timestamp`].
pub fn parse_bound(text: &str) -> Result<Seconds, FieldError> {
    if let Ok(value) = text.trim().parse::<f64>() {
        if value.is_finite() {
            return Ok(value);
        }
    }
    parse_timestamp(text)
}

fn print_json<T: Serialize>(value: &T) -> ClipCutResult<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Execute the trim command
pub async fn trim(args: TrimArgs, container: &dyn AppContainer, ffmpeg: &str) -> Result<()> {
    info!("Starting trim operation");

    let start = parse_bound(&args.start)
        .with_context(|| format!("Invalid start time '{}'", args.start))?;
    let end = parse_bound(&args.end).with_context(|| format!("Invalid end time '{}'", args.end))?;

    let request = TrimRequest {
        input: args.input,
        start,
        end,
        output: args.output,
        dry_run: args.dry_run,
    };

    let response = container.trim_interactor().execute(request).await?;

    if args.json {
        print_json(&response)?;
    } else {
        display_trim_response(&response, ffmpeg);
    }

    info!("Trim operation completed successfully");
    Ok(())
}

/// Execute the check command
pub async fn check(args: CheckArgs, container: &dyn AppContainer) -> Result<()> {
    let start = parse_bound(&args.start)
        .with_context(|| format!("Invalid start time '{}'", args.start))?;
    let end = parse_bound(&args.end).with_context(|| format!("Invalid end time '{}'", args.end))?;

    let duration = match (&args.duration, &args.input) {
        (Some(duration), _) => check_seconds(*duration)
            .with_context(|| format!("Invalid duration '{}'", duration))?,
        (None, Some(input)) => {
            container
                .inspect_interactor()
                .duration_or_unknown(input)
                .await
        }
        (None, None) => 0.0,
    };

    let mut selection = Selection::with_bounds(start, end);
    selection.set_duration(duration);
    let report = ValidationReport::new(selection.start, selection.end, selection.duration);

    if args.json {
        print_json(&report)?;
    } else if report.valid {
        println!("OK: {}", selection.preview());
    }

    selection.validate().map_err(anyhow::Error::from)
}

/// Media information as printed by `inspect`
#[derive(Debug, Serialize)]
struct InspectOutput<'a> {
    #[serde(flatten)]
    info: &'a MediaInfo,
    size_mb: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_hms: Option<String>,
}

/// Execute the inspect command
pub async fn inspect(args: InspectArgs, container: &dyn AppContainer) -> Result<()> {
    info!("Starting inspect operation");

    let media_info = container
        .inspect_interactor()
        .execute(&args.input)
        .await
        .context("Failed to inspect input file")?;

    let duration_hms = if media_info.is_duration_known() {
        Some(format_time(media_info.duration)?)
    } else {
        None
    };

    if args.json {
        print_json(&InspectOutput {
            info: &media_info,
            size_mb: media_info.size_mb(),
            duration_hms,
        })?;
    } else {
        display_media_info(&media_info, duration_hms.as_deref());
    }

    Ok(())
}

/// Time value as printed by `time`
#[derive(Debug, Serialize)]
struct TimeOutput {
    seconds: Seconds,
    components: TimeComponents,
    formatted: String,
}

/// Execute the time command
pub fn time(args: TimeArgs) -> Result<()> {
    let seconds =
        parse_timestamp(&args.time).with_context(|| format!("Invalid time '{}'", args.time))?;
    let components = to_components(seconds)?;
    let formatted = components.to_string();

    if args.json {
        print_json(&TimeOutput {
            seconds,
            components,
            formatted,
        })?;
    } else {
        println!("{}", formatted);
        println!(
            "hours: {}, minutes: {}, seconds: {}",
            components.hours, components.minutes, components.seconds
        );
    }

    Ok(())
}

/// Execute the config command
pub fn show_config(config: &AppConfig) -> ClipCutResult<()> {
    let toml = TomlConfigAdapter::serialize(config)?;
    std::io::stdout().lock().write_all(toml.as_bytes())?;
    Ok(())
}

fn display_trim_response(response: &TrimResponse, ffmpeg: &str) {
    let plan = &response.plan;
    println!("Input:  {}", plan.input.display());
    println!("Output: {}", plan.output.display());
    println!("Seek:   {}", plan.seek);
    println!("Length: {}", plan.length);

    match &response.report {
        Some(report) => {
            println!(
                "Done in {:.2}s ({:.1} MB)",
                report.processing_time.as_secs_f64(),
                report.file_size as f64 / 1024.0 / 1024.0
            );
        }
        None => {
            println!("Command: {} {}", ffmpeg, plan.ffmpeg_args().join(" "));
        }
    }
}

/// Display media information in human-readable format
fn display_media_info(media_info: &MediaInfo, duration_hms: Option<&str>) {
    let name = media_info
        .path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| media_info.path.clone());

    println!("File: {} ({:.1} MB)", name.display(), media_info.size_mb());
    match duration_hms {
        Some(hms) => println!("Duration: {} ({:.1}s)", hms, media_info.duration),
        None => println!("Duration: unknown"),
    }
}
