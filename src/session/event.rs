//! Event types for the build session

use std::time::SystemTime;

/// Lifecycle events a build session delivers to its listeners
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildEventKind {
    BuildFinished,
    ScanPublished,
}

impl BuildEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildEventKind::BuildFinished => "build-finished",
            BuildEventKind::ScanPublished => "scan-published",
        }
    }
}

impl std::fmt::Display for BuildEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of a scan the server has accepted, as delivered by the host.
///
/// The URI is kept as the host supplied it; decomposition happens where the
/// record is derived.
#[derive(Clone, Debug, PartialEq)]
pub struct PublishedScan {
    pub uri: String,
    pub id: String,
    pub published_at: SystemTime,
}

impl PublishedScan {
    pub fn new(uri: String, id: String) -> Self {
        Self {
            uri,
            id,
            published_at: SystemTime::now(),
        }
    }
}
