//! Configuration hierarchy
//!
//! Precedence, highest first: command line (clap also fills these from
//! `CLIPCUT_*` environment variables), config file, built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::adapters::toml_config::TomlConfigAdapter;
use crate::domain::errors::DomainError;
use crate::domain::model::OverwritePolicy;
use crate::utils::logging::{parse_level, LogFormat};

/// Effective application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// ffmpeg executable used for trimming
    pub ffmpeg_path: PathBuf,
    /// ffprobe executable used to read media duration
    pub ffprobe_path: PathBuf,
    pub log_level: String,
    pub log_format: LogFormat,
    pub overwrite: OverwritePolicy,
    /// Directory for generated output names; next to the input when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("ffmpeg"),
            ffprobe_path: PathBuf::from("ffprobe"),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            overwrite: OverwritePolicy::Never,
            output_dir: None,
        }
    }
}

/// One configuration layer; unset fields fall through to the layer below
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub ffmpeg_path: Option<PathBuf>,
    pub ffprobe_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub overwrite: Option<OverwritePolicy>,
    pub output_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Apply a layer on top of this configuration
    pub fn merge(self, layer: PartialConfig) -> Self {
        Self {
            ffmpeg_path: layer.ffmpeg_path.unwrap_or(self.ffmpeg_path),
            ffprobe_path: layer.ffprobe_path.unwrap_or(self.ffprobe_path),
            log_level: layer.log_level.unwrap_or(self.log_level),
            log_format: layer.log_format.unwrap_or(self.log_format),
            overwrite: layer.overwrite.unwrap_or(self.overwrite),
            output_dir: layer.output_dir.or(self.output_dir),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        parse_level(&self.log_level)?;

        if self.ffmpeg_path.as_os_str().is_empty() {
            return Err(DomainError::ConfigFail("ffmpeg_path cannot be empty".to_string()));
        }
        if self.ffprobe_path.as_os_str().is_empty() {
            return Err(DomainError::ConfigFail("ffprobe_path cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Build the effective configuration.
    ///
    /// An explicit `config_path` must exist; otherwise `clipcut.toml` in the
    /// working directory is used when present.
    pub fn load(config_path: Option<&Path>, overrides: PartialConfig) -> Result<Self, DomainError> {
        let file_layer = match config_path {
            Some(path) => {
                debug!("Loading configuration from: {}", path.display());
                TomlConfigAdapter::load(path)?
            }
            None => {
                let default_path = TomlConfigAdapter::default_config_path();
                if default_path.is_file() {
                    debug!("Loading configuration from: {}", default_path.display());
                    TomlConfigAdapter::load(&default_path)?
                } else {
                    PartialConfig::default()
                }
            }
        };

        let config = AppConfig::default().merge(file_layer).merge(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Log the effective configuration at startup
    pub fn log_summary(&self) {
        info!(
            ffmpeg = %self.ffmpeg_path.display(),
            ffprobe = %self.ffprobe_path.display(),
            overwrite = %self.overwrite,
            "Configuration loaded"
        );
    }
}
