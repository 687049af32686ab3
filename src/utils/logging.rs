//! Logging configuration and subscriber setup

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::domain::errors::DomainError;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Pretty,
    /// Compact text format
    Compact,
    /// JSON format for structured logging
    Json,
}

impl LogFormat {
    /// Parse log format from string
    pub fn parse(format_str: &str) -> Result<Self, DomainError> {
        match format_str.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid log format: {}. Valid formats: pretty, compact, json",
                format_str
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Check that `level` names a tracing level
pub fn parse_level(level: &str) -> Result<tracing::Level, DomainError> {
    tracing::Level::from_str(level).map_err(|_| {
        DomainError::BadArgs(format!(
            "Invalid log level: {}. Valid levels: trace, debug, info, warn, error",
            level
        ))
    })
}

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
///
/// Everything is written to stderr; stdout is reserved for command output.
pub fn init_logging(level: &str, format: LogFormat) -> Result<(), DomainError> {
    parse_level(level)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| DomainError::ConfigFail(format!("Failed to initialize logging: {}", e)))
}
