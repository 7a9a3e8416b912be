//! Capture Error Types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Unable to save scan data to {path}: {source}")]
    IoFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid scan URI '{uri}': {reason}")]
    InvalidScanUri { uri: String, reason: String },

    #[error("Invalid experiment context: {reason}")]
    InvalidContext { reason: String },

    #[error("Scan server address was not resolved before the build finished")]
    ServerUnresolved,
}

/// Result type for capture operations
pub type CaptureResult<T> = Result<T, CaptureError>;

impl crate::core::error_handling::ContextualError for CaptureError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, CaptureError::InvalidContext { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            CaptureError::InvalidContext { reason } => Some(reason),
            _ => None,
        }
    }
}
