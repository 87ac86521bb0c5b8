use std::path::PathBuf;
use thiserror::Error;

/// Run-level failures. Anything in here stops the replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to open input log {path}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open output log {path}: {source}")]
    OpenSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input line {line_number}: {source}")]
    ReadInput {
        line_number: u64,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// The bracketed field exists but is not an access-log timestamp.
///
/// This means the input is not in the expected format at all.
#[derive(Debug, Error)]
#[error("unparsable access-log timestamp '{field}': {reason}")]
pub struct TimestampError {
    pub field: String,
    #[source]
    pub reason: TimestampErrorReason,
}

#[derive(Debug, Error)]
pub enum TimestampErrorReason {
    #[error("expected dd/Mon/yyyy:HH:MM:SS +hhmm")]
    Layout,

    #[error(transparent)]
    Parse(#[from] chrono::ParseError),
}
