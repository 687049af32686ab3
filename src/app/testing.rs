// In-memory port implementations for interactor tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::adapters::fs_local::normalize_path;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::time::Seconds;
use crate::ports::*;

pub struct MockProbe {
    duration: Option<Seconds>,
}

impl MockProbe {
    pub fn with_duration(duration: Seconds) -> Self {
        Self {
            duration: Some(duration),
        }
    }

    pub fn failing() -> Self {
        Self { duration: None }
    }
}

#[async_trait]
impl ProbePort for MockProbe {
    async fn probe_duration(&self, _file_path: &Path) -> Result<Seconds, DomainError> {
        self.duration
            .ok_or_else(|| DomainError::ProbeFail("mock probe failure".to_string()))
    }
}

#[derive(Default)]
pub struct MockFs {
    files: Mutex<HashMap<PathBuf, u64>>,
    pub created_dirs: Mutex<Vec<PathBuf>>,
}

impl MockFs {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_file(path: &str, size: u64) -> Self {
        Self::empty().and_file(path, size)
    }

    pub fn and_file(self, path: &str, size: u64) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), size);
        self
    }
}

#[async_trait]
impl FsPort for MockFs {
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError> {
        Ok(self.files.lock().unwrap().contains_key(file_path))
    }

    async fn get_file_size(&self, file_path: &Path) -> Result<u64, DomainError> {
        self.files
            .lock()
            .unwrap()
            .get(file_path)
            .copied()
            .ok_or_else(|| DomainError::FsFail(format!("no such file: {}", file_path.display())))
    }

    async fn create_directory(&self, dir_path: &Path) -> Result<(), DomainError> {
        self.created_dirs.lock().unwrap().push(dir_path.to_path_buf());
        Ok(())
    }

    async fn resolve_path(&self, path: &Path) -> Result<PathBuf, DomainError> {
        Ok(normalize_path(path))
    }
}

#[derive(Default)]
pub struct MockExecutor {
    pub plans: Mutex<Vec<TrimPlan>>,
    fail: bool,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            plans: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn executed(&self) -> Vec<TrimPlan> {
        self.plans.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExecutePort for MockExecutor {
    async fn execute_plan(&self, plan: &TrimPlan) -> Result<TrimReport, DomainError> {
        self.plans.lock().unwrap().push(plan.clone());
        if self.fail {
            return Err(DomainError::ExecFail("mock ffmpeg failure".to_string()));
        }
        Ok(TrimReport {
            output: plan.output.clone(),
            file_size: 1024,
            processing_time: Duration::from_millis(10),
        })
    }
}
