// Local filesystem adapter - File checks through tokio::fs

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::errors::*;
use crate::ports::*;

/// Filesystem adapter for the local disk
#[derive(Debug, Default)]
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

/// Drop `.` components and fold `..` into the preceding name without
/// touching the disk
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError> {
        match fs::metadata(file_path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::FsFail(format!(
                "Failed to read metadata for {}: {}",
                file_path.display(),
                e
            ))),
        }
    }

    async fn get_file_size(&self, file_path: &Path) -> Result<u64, DomainError> {
        let metadata = fs::metadata(file_path)
            .await
            .map_err(|e| DomainError::FsFail(format!("Failed to get file size: {}", e)))?;
        Ok(metadata.len())
    }

    async fn create_directory(&self, dir_path: &Path) -> Result<(), DomainError> {
        fs::create_dir_all(dir_path)
            .await
            .map_err(|e| DomainError::FsFail(format!("Failed to create directory: {}", e)))?;
        Ok(())
    }

    async fn resolve_path(&self, path: &Path) -> Result<PathBuf, DomainError> {
        match fs::canonicalize(path).await {
            Ok(resolved) => return Ok(resolved),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(DomainError::FsFail(format!(
                    "Failed to resolve {}: {}",
                    path.display(),
                    e
                )))
            }
        }

        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            let cwd = std::env::current_dir().map_err(|e| {
                DomainError::FsFail(format!("Failed to read current directory: {}", e))
            })?;
            cwd.join(path)
        };
        let absolute = normalize_path(&absolute);

        // Not created yet: resolve the directory it will land in
        if let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) {
            if let Ok(parent) = fs::canonicalize(parent).await {
                return Ok(parent.join(name));
            }
        }
        Ok(absolute)
    }
}
