// TOML config adapter - Configuration files in TOML format

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, PartialConfig};
use crate::domain::errors::*;

/// File name looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "clipcut.toml";

/// On-disk layout: everything lives under a `[clipcut]` table
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile<T> {
    clipcut: Option<T>,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Default config file path
    pub fn default_config_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Deserialize config from TOML string
    pub fn parse(toml_content: &str) -> Result<PartialConfig, DomainError> {
        let parsed: ConfigFile<PartialConfig> = toml::from_str(toml_content)
            .map_err(|e| DomainError::ConfigFail(format!("Failed to parse TOML config: {}", e)))?;
        Ok(parsed.clipcut.unwrap_or_default())
    }

    /// Load configuration from file
    pub fn load(file_path: &Path) -> Result<PartialConfig, DomainError> {
        let content = std::fs::read_to_string(file_path).map_err(|e| {
            DomainError::ConfigFail(format!(
                "Failed to read config file {}: {}",
                file_path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }

    /// Serialize config to TOML string
    pub fn serialize(config: &AppConfig) -> Result<String, DomainError> {
        let file = ConfigFile {
            clipcut: Some(config),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| DomainError::ConfigFail(format!("Failed to serialize config: {}", e)))
    }
}
