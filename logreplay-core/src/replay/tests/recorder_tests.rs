use super::test_helpers::{TestSink, memory_sinks};
use crate::replay::{OutcomeRecorder, ReplayOutcome, failure_detail};
use crate::sinks::{OutputSinks, SinkKind};
use pretty_assertions::assert_eq;

#[test]
fn success_goes_to_success_log_only() {
    // Arrange
    let mut recorder = OutcomeRecorder::new(memory_sinks());

    // Act
    let failures = recorder.record("line one", &ReplayOutcome::Succeeded, "https://e.com/track");

    // Assert
    assert!(failures.is_empty());
    let sinks = recorder.into_sinks();
    assert_eq!(sinks.succeeded.text(), "line one\n");
    assert_eq!(sinks.failed.text(), "");
    assert_eq!(sinks.failure_details.text(), "");
}

#[test]
fn failure_writes_line_and_detail_record() {
    // Arrange
    let mut recorder = OutcomeRecorder::new(memory_sinks());
    let outcome = ReplayOutcome::Failed {
        status: 404,
        reason: "Unknown".to_string(),
    };

    // Act
    let failures = recorder.record("line two", &outcome, "https://e.com/track?x=1");

    // Assert
    assert!(failures.is_empty());
    let sinks = recorder.into_sinks();
    assert_eq!(sinks.succeeded.text(), "");
    assert_eq!(sinks.failed.text(), "line two\n");
    assert_eq!(
        sinks.failure_details.text(),
        "404,\"Unknown\",https://e.com/track?x=1\n"
    );
}

#[test]
fn detail_record_format() {
    assert_eq!(
        failure_detail(0, "connection refused", "http://127.0.0.1:1/track"),
        r#"0,"connection refused",http://127.0.0.1:1/track"#
    );
}

#[test]
fn broken_sink_is_reported_not_fatal() {
    // Arrange
    let sinks = OutputSinks {
        succeeded: TestSink::default(),
        failed: TestSink::broken(),
        failure_details: TestSink::default(),
    };
    let mut recorder = OutcomeRecorder::new(sinks);
    let outcome = ReplayOutcome::Failed {
        status: 500,
        reason: "Unknown".to_string(),
    };

    // Act
    let failures = recorder.record("line three", &outcome, "https://e.com/track");

    // Assert
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].sink, SinkKind::Failed);
    assert_eq!(failures[0].payload, "line three");

    // The detail record still made it.
    let sinks = recorder.into_sinks();
    assert_eq!(sinks.failure_details.text(), "500,\"Unknown\",https://e.com/track\n");
}
