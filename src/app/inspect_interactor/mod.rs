// Inspect interactor - Orchestrates media file inspection use case

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::time::Seconds;
use crate::ports::*;

/// Interactor for media file inspection use case
pub struct InspectInteractor {
    probe_port: Arc<dyn ProbePort>,
    fs_port: Arc<dyn FsPort>,
}

impl InspectInteractor {
    /// Create new inspect interactor with injected ports
    pub fn new(probe_port: Arc<dyn ProbePort>, fs_port: Arc<dyn FsPort>) -> Self {
        Self {
            probe_port,
            fs_port,
        }
    }

    /// Gather size and duration of an input file
    pub async fn execute(&self, input: &Path) -> Result<MediaInfo, DomainError> {
        info!("Starting media file inspection for: {}", input.display());

        if !self.fs_port.file_exists(input).await? {
            return Err(DomainError::FileNotFound(input.display().to_string()));
        }

        let file_size = self.fs_port.get_file_size(input).await?;
        let duration = self.duration_or_unknown(input).await;

        Ok(MediaInfo {
            path: input.to_path_buf(),
            file_size,
            duration,
        })
    }

    /// Probed duration, or 0 (unknown) when probing fails
    pub async fn duration_or_unknown(&self, input: &Path) -> Seconds {
        match self.probe_port.probe_duration(input).await {
            Ok(duration) => {
                info!("Media duration: {:.1}s", duration);
                duration
            }
            Err(e) => {
                warn!("Could not determine duration of {}: {}", input.display(), e);
                0.0
            }
        }
    }
}
