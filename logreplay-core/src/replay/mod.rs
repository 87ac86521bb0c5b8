//! Access-Log Replay Pipeline
//!
//! Reads a web-server access log one line at a time and reissues every
//! `GET /track...` request it finds against another host.
//!
//! For each line:
//! - **Admission**: the optional include/exclude regex decides whether the line is looked at
//! - **Reconstruction**: the request target is cut out of the line and appended to the base
//!   URL, optionally with the original request time as `&timestamp=<epoch-ms>`
//! - **Replay**: the URL is fetched with a GET (or just printed, in dry-run mode)
//! - **Recording**: the line goes to the success or failure log, failures also get a
//!   `status,"reason",url` detail record
//! - **Counting**: succeeded / failed / total
//!
//! Lines without a trackable request are echoed and skipped, uncounted. A timestamp that is
//! present but unparsable aborts the run, since the whole file is then in the wrong format.
//!
//! The overall data processing architecture is:
//!
//! input line
//! FilterMode::admits
//! build_request (extract_timestamp)
//! Replayer
//! OutcomeRecorder + StatsAggregator
//! render_summary
//!

mod constants;
mod error;
mod filter;
mod reconstruct;
mod recorder;
mod render;
mod replayer;
mod run;
mod stats_aggregation;
mod timestamp;
mod types;

#[cfg(test)]
mod tests;

pub use constants::THROTTLE;
pub use error::{ReplayError, TimestampError, TimestampErrorReason};
pub use filter::FilterMode;
pub use reconstruct::build_request;
pub use recorder::{OutcomeRecorder, SinkWriteFailure, failure_detail};
pub use render::render_summary;
pub use replayer::{HttpSender, Replayer, RequestSender};
pub use run::ReplayEngine;
pub use stats_aggregation::{RunStatistics, StatsAggregator};
pub use timestamp::extract_timestamp;
pub use types::{LineDisposition, ReconstructedRequest, Reconstruction, ReplayOutcome, SkipReason};
