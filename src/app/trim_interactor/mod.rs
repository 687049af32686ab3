// Trim interactor - Orchestrates the video trimming use case

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::app::inspect_interactor::InspectInteractor;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::selection::Selection;
use crate::domain::time::Seconds;
use crate::ports::*;

/// A request to cut `[start, end)` out of `input`
#[derive(Debug, Clone, PartialEq)]
pub struct TrimRequest {
    pub input: PathBuf,
    pub start: Seconds,
    pub end: Seconds,
    /// Generated from the selection when not given
    pub output: Option<PathBuf>,
    /// Plan only, do not run ffmpeg
    pub dry_run: bool,
}

/// Outcome of a trim request
#[derive(Debug, Clone, Serialize)]
pub struct TrimResponse {
    pub plan: TrimPlan,
    /// `None` for dry runs
    pub report: Option<TrimReport>,
}

/// Interactor for the trim use case
pub struct TrimInteractor {
    inspect: InspectInteractor,
    execute_port: Arc<dyn ExecutePort>,
    fs_port: Arc<dyn FsPort>,
    overwrite: OverwritePolicy,
    output_dir: Option<PathBuf>,
}

impl TrimInteractor {
    /// Create new trim interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        execute_port: Arc<dyn ExecutePort>,
        fs_port: Arc<dyn FsPort>,
        overwrite: OverwritePolicy,
        output_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            inspect: InspectInteractor::new(probe_port, Arc::clone(&fs_port)),
            execute_port,
            fs_port,
            overwrite,
            output_dir,
        }
    }

    /// Validate the selection against the media, then cut it
    pub async fn execute(&self, request: TrimRequest) -> Result<TrimResponse, DomainError> {
        info!(
            "Starting trim of {} from {}s to {}s",
            request.input.display(),
            request.start,
            request.end
        );

        if !self.fs_port.file_exists(&request.input).await? {
            return Err(DomainError::FileNotFound(request.input.display().to_string()));
        }

        let mut selection = Selection::with_bounds(request.start, request.end);
        selection.set_duration(self.inspect.duration_or_unknown(&request.input).await);
        selection.validate()?;
        debug!("{}", selection.preview());

        let output = match request.output {
            Some(output) => output,
            None => default_output_path(&request.input, &selection, self.output_dir.as_deref()),
        };
        self.check_output(&request.input, &output).await?;

        let plan = TrimPlan::from_selection(selection, &request.input, &output, self.overwrite)?;
        info!("Seek {} length {} -> {}", plan.seek, plan.length, output.display());

        if request.dry_run {
            return Ok(TrimResponse { plan, report: None });
        }

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs_port.create_directory(parent).await?;
        }

        let report = self.execute_port.execute_plan(&plan).await?;
        info!(
            "Trim completed: {} ({} bytes)",
            report.output.display(),
            report.file_size
        );

        Ok(TrimResponse {
            plan,
            report: Some(report),
        })
    }

    async fn check_output(&self, input: &Path, output: &Path) -> Result<(), DomainError> {
        let same_file = input == output || {
            let resolved_input = self.fs_port.resolve_path(input).await?;
            resolved_input == self.fs_port.resolve_path(output).await?
        };
        if same_file {
            return Err(DomainError::BadArgs(
                "Output file cannot be the same as the input file".to_string(),
            ));
        }

        if self.overwrite == OverwritePolicy::Never && self.fs_port.file_exists(output).await? {
            return Err(DomainError::OutputExists(output.display().to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{MockExecutor, MockFs, MockProbe};
    use crate::domain::validation::ValidationError;

    fn request(start: Seconds, end: Seconds) -> TrimRequest {
        TrimRequest {
            input: PathBuf::from("videos/in.mp4"),
            start,
            end,
            output: None,
            dry_run: false,
        }
    }

    fn interactor(
        probe: MockProbe,
        fs: Arc<MockFs>,
        executor: Arc<MockExecutor>,
        overwrite: OverwritePolicy,
    ) -> TrimInteractor {
        TrimInteractor::new(Arc::new(probe), executor, fs, overwrite, None)
    }

    #[tokio::test]
    async fn test_trim_executes_plan() {
        let fs = Arc::new(MockFs::with_file("videos/in.mp4", 4096));
        let executor = Arc::new(MockExecutor::new());
        let trim = interactor(
            MockProbe::with_duration(30.0),
            Arc::clone(&fs),
            Arc::clone(&executor),
            OverwritePolicy::Never,
        );

        let response = trim.execute(request(1.5, 10.0)).await.unwrap();

        assert_eq!(response.plan.seek, "00:00:01.5");
        assert_eq!(response.plan.length, "00:00:08.5");
        assert_eq!(
            response.plan.output,
            PathBuf::from("videos/trimmed_1_5_to_10s_in.mp4")
        );
        assert_eq!(response.plan.selection.duration, 30.0);
        assert!(response.report.is_some());
        assert_eq!(executor.executed().len(), 1);
        assert_eq!(
            fs.created_dirs.lock().unwrap().as_slice(),
            &[PathBuf::from("videos")]
        );
    }

    #[tokio::test]
    async fn test_trim_rejects_end_past_duration() {
        let executor = Arc::new(MockExecutor::new());
        let trim = interactor(
            MockProbe::with_duration(30.0),
            Arc::new(MockFs::with_file("videos/in.mp4", 4096)),
            Arc::clone(&executor),
            OverwritePolicy::Never,
        );

        let err = trim.execute(request(0.0, 50.0)).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation(ValidationError::EndExceedsDuration { duration: 30.0 })
        );
        assert!(executor.executed().is_empty());
    }

    #[tokio::test]
    async fn test_trim_unknown_duration_allows_any_end() {
        let executor = Arc::new(MockExecutor::new());
        let trim = interactor(
            MockProbe::failing(),
            Arc::new(MockFs::with_file("videos/in.mp4", 4096)),
            Arc::clone(&executor),
            OverwritePolicy::Never,
        );

        let response = trim.execute(request(0.0, 5000.0)).await.unwrap();
        assert_eq!(response.plan.length, "01:23:20");
        assert_eq!(executor.executed().len(), 1);
    }

    #[tokio::test]
    async fn test_trim_validation_precedence() {
        let trim = interactor(
            MockProbe::with_duration(30.0),
            Arc::new(MockFs::with_file("videos/in.mp4", 4096)),
            Arc::new(MockExecutor::new()),
            OverwritePolicy::Never,
        );

        let err = trim.execute(request(-1.0, 50.0)).await.unwrap_err();
        assert_eq!(err, DomainError::Validation(ValidationError::NegativeTime));

        let err = trim.execute(request(12.0, 12.0)).await.unwrap_err();
        assert_eq!(err, DomainError::Validation(ValidationError::StartNotBeforeEnd));
    }

    #[tokio::test]
    async fn test_trim_dry_run_skips_execution() {
        let executor = Arc::new(MockExecutor::new());
        let trim = interactor(
            MockProbe::with_duration(30.0),
            Arc::new(MockFs::with_file("videos/in.mp4", 4096)),
            Arc::clone(&executor),
            OverwritePolicy::Never,
        );

        let mut req = request(0.0, 20.0);
        req.dry_run = true;
        let response = trim.execute(req).await.unwrap();
        assert!(response.report.is_none());
        assert!(executor.executed().is_empty());
    }

    #[tokio::test]
    async fn test_trim_missing_input() {
        let trim = interactor(
            MockProbe::with_duration(30.0),
            Arc::new(MockFs::empty()),
            Arc::new(MockExecutor::new()),
            OverwritePolicy::Never,
        );

        let err = trim.execute(request(0.0, 20.0)).await.unwrap_err();
        assert!(matches!(err, DomainError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_trim_refuses_existing_output() {
        let fs = MockFs::with_file("videos/in.mp4", 4096).and_file("out.mp4", 10);
        let mut req = request(0.0, 20.0);
        req.output = Some(PathBuf::from("out.mp4"));

        let trim = interactor(
            MockProbe::with_duration(30.0),
            Arc::new(fs),
            Arc::new(MockExecutor::new()),
            OverwritePolicy::Never,
        );
        let err = trim.execute(req.clone()).await.unwrap_err();
        assert_eq!(err, DomainError::OutputExists("out.mp4".to_string()));

        let fs = MockFs::with_file("videos/in.mp4", 4096).and_file("out.mp4", 10);
        let trim = interactor(
            MockProbe::with_duration(30.0),
            Arc::new(fs),
            Arc::new(MockExecutor::new()),
            OverwritePolicy::Always,
        );
        let response = trim.execute(req).await.unwrap();
        assert_eq!(response.plan.ffmpeg_args()[0], "-y");
    }

    #[tokio::test]
    async fn test_trim_refuses_output_equal_to_input() {
        let mut req = request(0.0, 20.0);
        req.output = Some(PathBuf::from("videos/in.mp4"));

        let trim = interactor(
            MockProbe::with_duration(30.0),
            Arc::new(MockFs::with_file("videos/in.mp4", 4096)),
            Arc::new(MockExecutor::new()),
            OverwritePolicy::Always,
        );
        let err = trim.execute(req).await.unwrap_err();
        assert!(matches!(err, DomainError::BadArgs(_)));
    }

    #[tokio::test]
    async fn test_trim_refuses_other_spelling_of_input() {
        for output in ["./videos/in.mp4", "videos/../videos/in.mp4"] {
            let executor = Arc::new(MockExecutor::new());
            let mut req = request(0.0, 20.0);
            req.output = Some(PathBuf::from(output));

            let trim = interactor(
                MockProbe::with_duration(30.0),
                Arc::new(MockFs::with_file("videos/in.mp4", 4096)),
                Arc::clone(&executor),
                OverwritePolicy::Always,
            );
            let err = trim.execute(req).await.unwrap_err();
            assert!(matches!(err, DomainError::BadArgs(_)), "{output}");
            assert!(executor.executed().is_empty());
        }
    }

    #[tokio::test]
    async fn test_trim_propagates_exec_failure() {
        let trim = interactor(
            MockProbe::with_duration(30.0),
            Arc::new(MockFs::with_file("videos/in.mp4", 4096)),
            Arc::new(MockExecutor::failing()),
            OverwritePolicy::Never,
        );

        let err = trim.execute(request(0.0, 20.0)).await.unwrap_err();
        assert!(matches!(err, DomainError::ExecFail(_)));
    }
}
