//! Experiment context configuration
//!
//! The capture component receives its configuration explicitly at
//! construction instead of reading process-wide ambient state, so missing or
//! degenerate values fail here rather than as malformed paths or records at
//! capture time.

use crate::capture::error::{CaptureError, CaptureResult};
use std::path::{Path, PathBuf};

/// File name of the append-only scan log inside the experiment directory
pub const SCAN_LOG_FILE_NAME: &str = "build-scans.csv";

/// Immutable per-process experiment identity
///
/// Populated before the build session starts and read-only for its duration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperimentContext {
    experiment_dir: PathBuf,
    experiment_id: String,
    run_id: String,
}

impl ExperimentContext {
    /// Create a validated experiment context
    ///
    /// The scan log performs no CSV escaping, so identifiers containing
    /// commas, newlines or carriage returns are rejected here instead of
    /// corrupting the on-disk format later.
    pub fn new(
        experiment_dir: impl Into<PathBuf>,
        experiment_id: impl Into<String>,
        run_id: impl Into<String>,
    ) -> CaptureResult<Self> {
        let experiment_dir = experiment_dir.into();
        let experiment_id = experiment_id.into();
        let run_id = run_id.into();

        if experiment_dir.as_os_str().is_empty() {
            return Err(CaptureError::InvalidContext {
                reason: "experiment directory must not be empty".to_string(),
            });
        }
        validate_identifier("experiment id", &experiment_id)?;
        validate_identifier("experiment run id", &run_id)?;

        Ok(Self {
            experiment_dir,
            experiment_id,
            run_id,
        })
    }

    pub fn experiment_dir(&self) -> &Path {
        &self.experiment_dir
    }

    pub fn experiment_id(&self) -> &str {
        &self.experiment_id
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Path of the append-only scan log for this experiment
    pub fn scan_log_path(&self) -> PathBuf {
        self.experiment_dir.join(SCAN_LOG_FILE_NAME)
    }
}

fn validate_identifier(what: &str, value: &str) -> CaptureResult<()> {
    if value.is_empty() {
        return Err(CaptureError::InvalidContext {
            reason: format!("{what} must not be empty"),
        });
    }
    if value.contains(',') || value.contains('\n') || value.contains('\r') {
        return Err(CaptureError::InvalidContext {
            reason: format!("{what} must not contain commas or line breaks"),
        });
    }
    Ok(())
}
