//! Global arguments parsing for the command line interface

use crate::capture::api::{CaptureError, CaptureResult, ExperimentContext};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Global arguments structure with all command-line options
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "scanlog")]
#[command(about = "Build scan capture and experiment cross-referencing tool")]
#[command(version)]
pub struct Args {
    /// Experiment directory the scan log is appended under
    #[arg(long = "experiment-dir", value_name = "DIR")]
    pub experiment_dir: Option<PathBuf>,

    /// Identifier of the current experiment
    #[arg(long = "experiment-id", value_name = "ID")]
    pub experiment_id: Option<String>,

    /// Identifier of the current run within the experiment
    #[arg(long = "run-id", value_name = "ID")]
    pub run_id: Option<String>,

    /// Configuration file path
    #[arg(long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Force colored output (overrides TTY detection and NO_COLOR)
    #[arg(long = "color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,

    /// Log level
    #[arg(long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
}

impl Args {
    /// Net -q/-v verbosity offset
    pub fn verbosity(&self) -> i8 {
        (self.verbose as i8) - (self.quiet as i8)
    }

    /// Build the validated experiment context from the merged arguments
    ///
    /// All three values must be present before the build session starts;
    /// validation of their content happens in `ExperimentContext::new`.
    pub fn experiment_context(&self) -> CaptureResult<ExperimentContext> {
        let experiment_dir = self.experiment_dir.as_ref().ok_or_else(|| {
            CaptureError::InvalidContext {
                reason: "missing --experiment-dir (or experiment-dir in the config file)"
                    .to_string(),
            }
        })?;
        let experiment_id =
            self.experiment_id
                .as_ref()
                .ok_or_else(|| CaptureError::InvalidContext {
                    reason: "missing --experiment-id (or experiment-id in the config file)"
                        .to_string(),
                })?;
        let run_id = self
            .run_id
            .as_ref()
            .ok_or_else(|| CaptureError::InvalidContext {
                reason: "missing --run-id (or run-id in the config file)".to_string(),
            })?;

        ExperimentContext::new(experiment_dir, experiment_id, run_id)
    }
}
