use std::sync::Arc;

use crate::adapters::{FFmpegAdapter, FFprobeAdapter, LocalFsAdapter};
use crate::app::{inspect_interactor::InspectInteractor, trim_interactor::TrimInteractor};
use crate::config::AppConfig;
use crate::ports::{ExecutePort, FsPort, ProbePort};

pub trait AppContainer: Send + Sync {
    fn trim_interactor(&self) -> Arc<TrimInteractor>;
    fn inspect_interactor(&self) -> Arc<InspectInteractor>;
}

pub struct DefaultAppContainer {
    trim_interactor: Arc<TrimInteractor>,
    inspect_interactor: Arc<InspectInteractor>,
}

impl DefaultAppContainer {
    pub fn new(config: &AppConfig) -> Self {
        let probe_port = Arc::new(FFprobeAdapter::new(&config.ffprobe_path));
        let execute_port = Arc::new(FFmpegAdapter::new(&config.ffmpeg_path));
        let fs_port = Arc::new(LocalFsAdapter::new());

        let trim_interactor = Arc::new(TrimInteractor::new(
            Arc::clone(&probe_port) as Arc<dyn ProbePort>,
            Arc::clone(&execute_port) as Arc<dyn ExecutePort>,
            Arc::clone(&fs_port) as Arc<dyn FsPort>,
            config.overwrite,
            config.output_dir.clone(),
        ));

        let inspect_interactor = Arc::new(InspectInteractor::new(
            Arc::clone(&probe_port) as Arc<dyn ProbePort>,
            Arc::clone(&fs_port) as Arc<dyn FsPort>,
        ));

        Self {
            trim_interactor,
            inspect_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn trim_interactor(&self) -> Arc<TrimInteractor> {
        Arc::clone(&self.trim_interactor)
    }

    fn inspect_interactor(&self) -> Arc<InspectInteractor> {
        Arc::clone(&self.inspect_interactor)
    }
}
