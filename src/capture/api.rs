//! Public API for the scan capture system
//!
//! This module provides the complete public API for the capture system.
//! External modules should import from here rather than directly from
//! internal modules.

// Configuration and persisted record types
pub use crate::capture::context::{ExperimentContext, SCAN_LOG_FILE_NAME};
pub use crate::capture::record::ScanRecord;

// Cross-reference links
pub use crate::capture::link::{
    append_if_missing, url_encode, CrossReferenceLink, SCAN_ID_PLACEHOLDER,
};

// The listener and its errors
pub use crate::capture::error::{CaptureError, CaptureResult};
pub use crate::capture::listener::{ScanCaptureListener, LISTENER_ID};
