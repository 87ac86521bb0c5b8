use crate::replay::types::ReplayOutcome;
use crate::sinks::{OutputSinks, SinkKind};
use std::io::{self, Write};

/// A write that didn't make it to its sink. Never fatal.
#[derive(Debug)]
pub struct SinkWriteFailure {
    pub sink: SinkKind,
    /// The text that was meant to be written, without its trailing newline.
    pub payload: String,
    pub error: io::Error,
}

/// Appends replayed lines to the success / failure logs.
///
/// Failures additionally get a `status,"reason",url` record in the
/// failure-detail log.
pub struct OutcomeRecorder<W> {
    sinks: OutputSinks<W>,
}

impl<W: Write> OutcomeRecorder<W> {
    pub fn new(sinks: OutputSinks<W>) -> Self {
        Self { sinks }
    }

    pub fn record(
        &mut self,
        line: &str,
        outcome: &ReplayOutcome,
        url: &str,
    ) -> Vec<SinkWriteFailure> {
        let mut failures = Vec::new();

        match outcome {
            ReplayOutcome::Succeeded => {
                let sink = &mut self.sinks.succeeded;
                append(sink, SinkKind::Succeeded, line, &mut failures);
            }
            ReplayOutcome::Failed { status, reason } => {
                append(&mut self.sinks.failed, SinkKind::Failed, line, &mut failures);

                let detail = failure_detail(*status, reason, url);
                append(
                    &mut self.sinks.failure_details,
                    SinkKind::FailureDetails,
                    &detail,
                    &mut failures,
                );
            }
        }

        failures
    }

    pub fn into_sinks(self) -> OutputSinks<W> {
        self.sinks
    }
}

/// `404,"Unknown",https://example.com/track?x=1`
pub fn failure_detail(status: u16, reason: &str, url: &str) -> String {
    format!("{status},\"{reason}\",{url}")
}

fn append<W: Write>(
    sink: &mut W,
    kind: SinkKind,
    payload: &str,
    failures: &mut Vec<SinkWriteFailure>,
) {
    let result = sink
        .write_all(payload.as_bytes())
        .and_then(|_| sink.write_all(b"\n"))
        .and_then(|_| sink.flush());

    if let Err(error) = result {
        failures.push(SinkWriteFailure {
            sink: kind,
            payload: payload.to_string(),
            error,
        });
    }
}
