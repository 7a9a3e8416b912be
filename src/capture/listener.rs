//! ScanCapture listener
//!
//! Bridges build lifecycle events into a durable scan log and into
//! searchable metadata on the scan itself. On build-finished it annotates the
//! build outcome with the experiment identity and cross-reference links; on
//! scan-published it appends one record to the experiment's scan log.

use crate::capture::context::ExperimentContext;
use crate::capture::error::{CaptureError, CaptureResult};
use crate::capture::link::CrossReferenceLink;
use crate::capture::record::ScanRecord;
use crate::session::api::{BuildListener, BuildOutcome, ListenerError, PublishedScan};
use async_trait::async_trait;
use std::fs::OpenOptions;
use std::io::Write;

pub const LISTENER_ID: &str = "scan-capture";

pub struct ScanCaptureListener {
    context: ExperimentContext,
}

impl ScanCaptureListener {
    pub fn new(context: ExperimentContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &ExperimentContext {
        &self.context
    }

    /// Attach a labeled custom value plus its search link to the outcome
    fn add_custom_value_and_search_link(
        outcome: &mut BuildOutcome,
        server: &str,
        label: &str,
        value: &str,
    ) {
        outcome.value(label, value);
        let link = CrossReferenceLink::for_annotation(server, label, value);
        outcome.link(link.title, link.url);
    }

    /// Append one record to the scan log
    ///
    /// The whole line is written with a single bounded write on an
    /// append-mode handle, which POSIX guarantees to be atomic with respect
    /// to other appenders; the handle is released on every exit path.
    fn append_record(&self, record: &ScanRecord) -> CaptureResult<()> {
        let path = self.context.scan_log_path();
        let line = record.to_csv_line();

        let io_failure = |source: std::io::Error| {
            log::error!("Unable to save scan data to {}: {}", path.display(), source);
            CaptureError::IoFailure {
                path: path.clone(),
                source,
            }
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_failure)?;
        file.write_all(line.as_bytes()).map_err(io_failure)?;
        Ok(())
    }
}

#[async_trait]
impl BuildListener for ScanCaptureListener {
    fn listener_id(&self) -> &str {
        LISTENER_ID
    }

    async fn on_build_finished(&self, outcome: &mut BuildOutcome) -> Result<(), ListenerError> {
        // The server address must be known here; the search links embed it.
        let server = outcome
            .server()
            .ok_or(CaptureError::ServerUnresolved)?
            .to_string();

        let experiment_id = self.context.experiment_id();
        Self::add_custom_value_and_search_link(outcome, &server, "Experiment id", experiment_id);
        // The tag carries the experiment id and is attached once, here only.
        outcome.tag(experiment_id);

        Self::add_custom_value_and_search_link(
            outcome,
            &server,
            "Experiment run id",
            self.context.run_id(),
        );
        Ok(())
    }

    async fn on_scan_published(
        &self,
        _outcome: &BuildOutcome,
        scan: &PublishedScan,
    ) -> Result<(), ListenerError> {
        log::debug!(
            "Saving build scan data to {}",
            self.context.scan_log_path().display()
        );
        let record = ScanRecord::from_published(scan)?;
        self.append_record(&record)?;
        Ok(())
    }
}
