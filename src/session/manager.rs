//! BuildSession implementation
//!
//! One BuildSession models one execution of the host build tool. An external
//! driver fires lifecycle events into the session; the session dispatches
//! them to registered listeners exactly once per event per build, on whatever
//! task the driver runs on. Listeners attach metadata to the session's
//! BuildOutcome.

use crate::session::error::SessionError;
use crate::session::event::{BuildEventKind, PublishedScan};
use crate::session::outcome::BuildOutcome;
use crate::session::traits::BuildListener;
use std::sync::Arc;

pub struct BuildSession {
    outcome: BuildOutcome,
    listeners: Vec<Arc<dyn BuildListener>>,
    finished_delivered: bool,
    scan_published_delivered: bool,
}

impl Default for BuildSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildSession {
    pub fn new() -> Self {
        Self {
            outcome: BuildOutcome::new(),
            listeners: Vec::new(),
            finished_delivered: false,
            scan_published_delivered: false,
        }
    }

    /// Register a listener for this session's lifecycle events
    pub fn register_listener(&mut self, listener: Arc<dyn BuildListener>) {
        if self
            .listeners
            .iter()
            .any(|existing| existing.listener_id() == listener.listener_id())
        {
            log::warn!(
                "Listener '{}' registered more than once; every registration receives events",
                listener.listener_id()
            );
        }
        log::trace!("Registering listener '{}'", listener.listener_id());
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Record the scan server base address on the outcome once resolved
    pub fn set_server(&mut self, server: &str) {
        log::debug!("Scan server resolved: {}", server);
        self.outcome.set_server(server);
    }

    /// The session's accumulated build outcome
    pub fn outcome(&self) -> &BuildOutcome {
        &self.outcome
    }

    /// Dispatch the build-finished event to all listeners
    ///
    /// Exactly-once: a second fire for the same session fails with
    /// `AlreadyDelivered`. A listener error aborts the dispatch and is
    /// surfaced to the driver.
    pub async fn fire_build_finished(&mut self) -> Result<(), SessionError> {
        if self.finished_delivered {
            return Err(SessionError::AlreadyDelivered {
                event: BuildEventKind::BuildFinished,
            });
        }
        self.finished_delivered = true;

        log::trace!(
            "Dispatching build-finished to {} listener(s)",
            self.listeners.len()
        );
        let listeners = self.listeners.clone();
        for listener in listeners {
            listener
                .on_build_finished(&mut self.outcome)
                .await
                .map_err(|source| SessionError::ListenerFailed {
                    listener_id: listener.listener_id().to_string(),
                    event: BuildEventKind::BuildFinished,
                    source,
                })?;
        }
        Ok(())
    }

    /// Dispatch the scan-published event to all listeners
    ///
    /// Delivered after the scan upload completed. Same exactly-once and
    /// error semantics as `fire_build_finished`.
    pub async fn fire_scan_published(&mut self, scan: PublishedScan) -> Result<(), SessionError> {
        if self.scan_published_delivered {
            return Err(SessionError::AlreadyDelivered {
                event: BuildEventKind::ScanPublished,
            });
        }
        self.scan_published_delivered = true;

        log::trace!(
            "Dispatching scan-published for scan '{}' to {} listener(s)",
            scan.id,
            self.listeners.len()
        );
        let listeners = self.listeners.clone();
        for listener in listeners {
            listener
                .on_scan_published(&self.outcome, &scan)
                .await
                .map_err(|source| SessionError::ListenerFailed {
                    listener_id: listener.listener_id().to_string(),
                    event: BuildEventKind::ScanPublished,
                    source,
                })?;
        }
        Ok(())
    }
}
