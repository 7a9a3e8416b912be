//! Error types for the build session system

use crate::session::event::BuildEventKind;
use std::fmt;

#[derive(Debug)]
pub enum SessionError {
    /// The event was already delivered for this session; delivery is
    /// exactly-once per build
    AlreadyDelivered { event: BuildEventKind },
    /// A listener callback failed; fatal for the triggering event
    ListenerFailed {
        listener_id: String,
        event: BuildEventKind,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::AlreadyDelivered { event } => {
                write!(f, "Event '{event}' already delivered for this session")
            }
            SessionError::ListenerFailed {
                listener_id,
                event,
                source,
            } => {
                write!(
                    f,
                    "Listener '{listener_id}' failed handling '{event}': {source}"
                )
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::AlreadyDelivered { .. } => None,
            SessionError::ListenerFailed { source, .. } => Some(source.as_ref()),
        }
    }
}

impl crate::core::error_handling::ContextualError for SessionError {
    fn is_user_actionable(&self) -> bool {
        false // Session errors are host-contract violations or listener faults
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_delivered_display() {
        let err = SessionError::AlreadyDelivered {
            event: BuildEventKind::BuildFinished,
        };
        assert_eq!(
            err.to_string(),
            "Event 'build-finished' already delivered for this session"
        );
    }

    #[test]
    fn test_listener_failed_carries_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SessionError::ListenerFailed {
            listener_id: "scan-capture".to_string(),
            event: BuildEventKind::ScanPublished,
            source: Box::new(cause),
        };
        assert!(err.to_string().contains("scan-capture"));
        assert!(err.to_string().contains("scan-published"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
