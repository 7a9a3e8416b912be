//! External event driver
//!
//! The host build tool is an external collaborator; this driver stands at the
//! boundary and replays its lifecycle events into a BuildSession. Events
//! arrive as JSON lines on stdin, one object per line:
//!
//! ```text
//! {"event":"server-resolved","server":"https://scans.example.com"}
//! {"event":"build-finished"}
//! {"event":"scan-published","uri":"https://scans.example.com/s/abc123","id":"abc123"}
//! ```
//!
//! Delivery order is the host's responsibility; the session enforces
//! exactly-once per event.

use crate::capture::api::{ExperimentContext, ScanCaptureListener};
use crate::session::api::{BuildOutcome, BuildSession, PublishedScan, SessionError};
use colored::Colorize;
use serde::Deserialize;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// One lifecycle event as emitted by the host
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum HostEvent {
    ServerResolved { server: String },
    BuildFinished,
    ScanPublished { uri: String, id: String },
}

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Failed to read host event stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed host event: {0}")]
    MalformedEvent(#[from] serde_json::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::core::error_handling::ContextualError for DriverError {
    fn is_user_actionable(&self) -> bool {
        false
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}

/// Run a capture session against the host event stream on stdin
pub async fn run(context: ExperimentContext) -> Result<(), DriverError> {
    let stdin = BufReader::new(tokio::io::stdin());
    run_with_reader(context, stdin).await
}

/// Run a capture session against any host event stream
pub async fn run_with_reader<R>(
    context: ExperimentContext,
    reader: R,
) -> Result<(), DriverError>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    let mut session = BuildSession::new();
    session.register_listener(Arc::new(ScanCaptureListener::new(context)));

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event: HostEvent = serde_json::from_str(line)?;
        dispatch(&mut session, event).await?;
    }

    print_outcome_summary(session.outcome());
    Ok(())
}

async fn dispatch(session: &mut BuildSession, event: HostEvent) -> Result<(), DriverError> {
    log::trace!("Host event received: {:?}", event);
    match event {
        HostEvent::ServerResolved { server } => {
            session.set_server(&server);
            Ok(())
        }
        HostEvent::BuildFinished => Ok(session.fire_build_finished().await?),
        HostEvent::ScanPublished { uri, id } => {
            Ok(session.fire_scan_published(PublishedScan::new(uri, id)).await?)
        }
    }
}

fn print_outcome_summary(outcome: &BuildOutcome) {
    println!("{}", "Build outcome".bold());
    for (label, value) in outcome.values() {
        println!("  {} {} = {}", "value".cyan(), label, value);
    }
    for tag in outcome.tags() {
        println!("  {} {}", "tag".cyan(), tag);
    }
    for (title, url) in outcome.links() {
        println!("  {} {} -> {}", "link".cyan(), title, url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn context(dir: &std::path::Path) -> ExperimentContext {
        ExperimentContext::new(dir, "exp-42", "run-7").unwrap()
    }

    #[test]
    fn test_host_event_parsing() {
        let event: HostEvent =
            serde_json::from_str(r#"{"event":"server-resolved","server":"https://s.example.com"}"#)
                .unwrap();
        assert_eq!(
            event,
            HostEvent::ServerResolved {
                server: "https://s.example.com".to_string()
            }
        );

        let event: HostEvent = serde_json::from_str(r#"{"event":"build-finished"}"#).unwrap();
        assert_eq!(event, HostEvent::BuildFinished);

        let event: HostEvent = serde_json::from_str(
            r#"{"event":"scan-published","uri":"https://s.example.com/s/1","id":"1"}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            HostEvent::ScanPublished {
                uri: "https://s.example.com/s/1".to_string(),
                id: "1".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_event_name_is_rejected() {
        let result: Result<HostEvent, _> =
            serde_json::from_str(r#"{"event":"scan-exploded","boom":true}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_full_event_stream_appends_and_annotates() {
        let dir = tempfile::tempdir().unwrap();
        let stream = concat!(
            "{\"event\":\"server-resolved\",\"server\":\"https://scans.example.com\"}\n",
            "\n",
            "{\"event\":\"build-finished\"}\n",
            "{\"event\":\"scan-published\",\"uri\":\"https://scans.example.com/s/abc123\",\"id\":\"abc123\"}\n",
        );

        run_with_reader(context(dir.path()), Cursor::new(stream))
            .await
            .unwrap();

        let contents = std::fs::read_to_string(dir.path().join("build-scans.csv")).unwrap();
        assert_eq!(
            contents,
            "https://scans.example.com,https://scans.example.com/s/abc123,abc123\n"
        );
    }

    #[tokio::test]
    async fn test_refired_event_surfaces_session_error() {
        let dir = tempfile::tempdir().unwrap();
        let stream = concat!(
            "{\"event\":\"server-resolved\",\"server\":\"https://scans.example.com\"}\n",
            "{\"event\":\"build-finished\"}\n",
            "{\"event\":\"build-finished\"}\n",
        );

        let err = run_with_reader(context(dir.path()), Cursor::new(stream))
            .await
            .unwrap_err();
        assert!(matches!(err, DriverError::Session(_)));
    }

    #[tokio::test]
    async fn test_malformed_line_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_with_reader(context(dir.path()), Cursor::new("not json\n"))
            .await
            .unwrap_err();
        assert!(matches!(err, DriverError::MalformedEvent(_)));
    }
}
