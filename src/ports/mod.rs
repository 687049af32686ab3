// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::time::Seconds;

/// Port for reading media metadata
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Duration of the media in seconds
    async fn probe_duration(&self, file_path: &Path) -> Result<Seconds, DomainError>;
}

/// Port for the external trim operation
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Run the cut described by `plan`
    async fn execute_plan(&self, plan: &TrimPlan) -> Result<TrimReport, DomainError>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if file exists
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError>;

    /// Get file size
    async fn get_file_size(&self, file_path: &Path) -> Result<u64, DomainError>;

    /// Create directory (including parent directories)
    async fn create_directory(&self, dir_path: &Path) -> Result<(), DomainError>;

    /// Absolute form of `path` with links and `.`/`..` resolved.
    /// The path does not have to exist.
    async fn resolve_path(&self, path: &Path) -> Result<PathBuf, DomainError>;
}
