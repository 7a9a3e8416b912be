//! Traits for the build session system

use crate::session::event::PublishedScan;
use crate::session::outcome::BuildOutcome;
use async_trait::async_trait;

/// Error type listeners may surface from a callback
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Trait for build lifecycle listeners
///
/// The session guarantees exactly-once delivery of each event per build.
/// `on_build_finished` fires before `on_scan_published`, but listeners must
/// not depend on state shared between the two callbacks.
#[async_trait]
pub trait BuildListener: Send + Sync {
    /// Get the unique identifier for this listener
    fn listener_id(&self) -> &str;

    /// Invoked once near the end of the build, after the scan server address
    /// is resolvable
    async fn on_build_finished(&self, outcome: &mut BuildOutcome) -> Result<(), ListenerError>;

    /// Invoked once per successfully published scan, after the upload
    /// completed
    async fn on_scan_published(
        &self,
        outcome: &BuildOutcome,
        scan: &PublishedScan,
    ) -> Result<(), ListenerError>;
}
