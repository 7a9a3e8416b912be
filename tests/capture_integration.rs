//! End-to-end capture tests
//!
//! Drives full build sessions through the public API and checks the two
//! observable effects: the appended scan log and the annotated build outcome.

use scanlog::capture::api::{ExperimentContext, ScanCaptureListener, SCAN_LOG_FILE_NAME};
use scanlog::session::api::{BuildSession, PublishedScan, SessionError};
use std::sync::Arc;

fn session_for(context: ExperimentContext) -> BuildSession {
    let mut session = BuildSession::new();
    session.register_listener(Arc::new(ScanCaptureListener::new(context)));
    session
}

#[tokio::test]
async fn test_full_session_produces_record_and_annotations() {
    let dir = tempfile::tempdir().unwrap();
    let context = ExperimentContext::new(dir.path(), "exp-42", "run-7").unwrap();
    let mut session = session_for(context);

    session.set_server("https://scans.example.com");
    session.fire_build_finished().await.unwrap();
    session
        .fire_scan_published(PublishedScan::new(
            "https://scans.example.com/s/abc123".to_string(),
            "abc123".to_string(),
        ))
        .await
        .unwrap();

    let contents = std::fs::read_to_string(dir.path().join(SCAN_LOG_FILE_NAME)).unwrap();
    assert_eq!(
        contents,
        "https://scans.example.com,https://scans.example.com/s/abc123,abc123\n"
    );

    let outcome = session.outcome();
    assert_eq!(
        outcome.values(),
        &[
            ("Experiment id".to_string(), "exp-42".to_string()),
            ("Experiment run id".to_string(), "run-7".to_string()),
        ]
    );
    assert_eq!(outcome.tags(), &["exp-42".to_string()]);
    assert_eq!(
        outcome.links()[0].1,
        "https://scans.example.com/scans?search.names=Experiment%20id&search.values=exp-42#selection.buildScanB=%7BSCAN_ID%7D"
    );
    assert_eq!(
        outcome.links()[1].1,
        "https://scans.example.com/scans?search.names=Experiment%20run%20id&search.values=run-7#selection.buildScanB=%7BSCAN_ID%7D"
    );
}

#[tokio::test]
async fn test_repeated_builds_append_in_arrival_order() {
    let dir = tempfile::tempdir().unwrap();

    // Each validation build is its own session; they share one scan log.
    let scans = [
        ("https://scans.example.com/s/one", "one"),
        ("https://scans.example.com:9191/s/two", "two"),
        ("http://scans.internal/s/three", "three"),
    ];
    for (uri, id) in scans {
        let context = ExperimentContext::new(dir.path(), "exp-42", "run-7").unwrap();
        let mut session = session_for(context);
        session.set_server("https://scans.example.com");
        session.fire_build_finished().await.unwrap();
        session
            .fire_scan_published(PublishedScan::new(uri.to_string(), id.to_string()))
            .await
            .unwrap();
    }

    let contents = std::fs::read_to_string(dir.path().join(SCAN_LOG_FILE_NAME)).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "https://scans.example.com,https://scans.example.com/s/one,one"
    );
    assert_eq!(
        lines[1],
        "https://scans.example.com:9191,https://scans.example.com:9191/s/two,two"
    );
    assert_eq!(lines[2], "http://scans.internal,http://scans.internal/s/three,three");
    for line in lines {
        assert_eq!(line.split(',').count(), 3);
    }
    assert!(contents.ends_with('\n'));
}

#[tokio::test]
async fn test_unwritable_experiment_dir_fails_without_partial_record() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("never-created");
    let context = ExperimentContext::new(&missing, "exp-42", "run-7").unwrap();
    let mut session = session_for(context);
    session.set_server("https://scans.example.com");

    let err = session
        .fire_scan_published(PublishedScan::new(
            "https://scans.example.com/s/abc123".to_string(),
            "abc123".to_string(),
        ))
        .await
        .unwrap_err();

    match err {
        SessionError::ListenerFailed { source, .. } => {
            assert!(source.to_string().contains("Unable to save scan data"));
        }
        other => panic!("Expected ListenerFailed, got {other:?}"),
    }
    assert!(!missing.join(SCAN_LOG_FILE_NAME).exists());
}

#[tokio::test]
async fn test_unresolved_server_fails_build_finished() {
    let dir = tempfile::tempdir().unwrap();
    let context = ExperimentContext::new(dir.path(), "exp-42", "run-7").unwrap();
    let mut session = session_for(context);

    let err = session.fire_build_finished().await.unwrap_err();
    assert!(matches!(err, SessionError::ListenerFailed { .. }));
}
