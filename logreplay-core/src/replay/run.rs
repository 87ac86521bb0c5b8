use crate::config::ReplayConfig;
use crate::replay::constants::THROTTLE;
use crate::replay::error::ReplayError;
use crate::replay::reconstruct::build_request;
use crate::replay::recorder::{OutcomeRecorder, SinkWriteFailure};
use crate::replay::replayer::{Replayer, RequestSender};
use crate::replay::stats_aggregation::{RunStatistics, StatsAggregator};
use crate::replay::types::{LineDisposition, Reconstruction, ReplayOutcome};
use crate::sinks::OutputSinks;
use std::io::{BufRead, Write};
use std::thread;

/// Drives every input line through filter, reconstruction, replay, recording and counting.
///
/// Strictly sequential: a line is fully handled before the next one is read.
/// `console` receives the user-facing output (skipped lines, dry-run URLs,
/// sink write failures).
pub struct ReplayEngine<'a, S, W, C> {
    config: &'a ReplayConfig,
    replayer: Replayer<S>,
    recorder: OutcomeRecorder<W>,
    stats: StatsAggregator,
    console: C,
}

impl<'a, S, W, C> ReplayEngine<'a, S, W, C>
where
    S: RequestSender,
    W: Write,
    C: Write,
{
    pub fn new(config: &'a ReplayConfig, sender: S, sinks: OutputSinks<W>, console: C) -> Self {
        Self {
            config,
            replayer: Replayer::new(sender, config.dry_run),
            recorder: OutcomeRecorder::new(sinks),
            stats: StatsAggregator::new(),
            console,
        }
    }

    /// Replays every line of `reader` in order until end of input.
    ///
    /// Stops early only on a read error or an unparsable timestamp. A read error
    /// still reports the counts reached so far.
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> Result<RunStatistics, ReplayError> {
        tracing::info!(
            base_url = %self.config.base_url,
            dry_run = self.config.dry_run,
            include_timestamp = self.config.include_timestamp,
            "replay started"
        );

        let mut buf = Vec::new();
        let mut line_number: u64 = 0;

        loop {
            buf.clear();
            let read = match reader.read_until(b'\n', &mut buf) {
                Ok(read) => read,
                Err(source) => {
                    let _ = self.report();
                    return Err(ReplayError::ReadInput {
                        line_number: line_number + 1,
                        source,
                    });
                }
            };

            if read == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(trim_line_ending(&buf));
            self.process_line(&line)?;
        }

        let stats = self.stats.snapshot();
        tracing::info!(
            succeeded = stats.succeeded,
            failed = stats.failed,
            total = stats.total,
            "replay finished"
        );

        Ok(stats)
    }

    pub fn process_line(&mut self, line: &str) -> Result<LineDisposition, ReplayError> {
        if !self.config.filter.admits(line) {
            tracing::trace!("line rejected by filter");
            return Ok(LineDisposition::Rejected);
        }

        let reconstruction =
            build_request(line, &self.config.base_url, self.config.include_timestamp)?;

        let request = match reconstruction {
            Reconstruction::Request(request) => request,
            Reconstruction::Skip(reason) => {
                tracing::debug!(reason = reason.as_str(), "line skipped");
                let _ = writeln!(self.console, "{line}");
                return Ok(LineDisposition::Skipped(reason));
            }
        };

        if self.replayer.is_dry_run() {
            let _ = writeln!(self.console, "{}", request.url);
        }

        let outcome = self.replayer.replay(&request.url);

        if let ReplayOutcome::Failed { status, reason } = &outcome {
            tracing::warn!(status, reason = %reason, url = %request.url, "replay failed");
        } else {
            tracing::debug!(url = %request.url, "replay succeeded");
        }

        for failure in self.recorder.record(line, &outcome, &request.url) {
            self.report_sink_failure(&failure);
        }

        thread::sleep(THROTTLE);

        self.stats.increment(&outcome);

        Ok(LineDisposition::Replayed(outcome))
    }

    pub fn stats(&self) -> RunStatistics {
        self.stats.snapshot()
    }

    pub fn report(&mut self) -> std::io::Result<()> {
        self.stats.report(&mut self.console)
    }

    pub fn into_sinks(self) -> OutputSinks<W> {
        self.recorder.into_sinks()
    }

    fn report_sink_failure(&mut self, failure: &SinkWriteFailure) {
        tracing::warn!(
            sink = failure.sink.file_name(),
            error = %failure.error,
            "failed to write to output log"
        );
        let _ = writeln!(self.console, "{}", failure.payload);
        let _ = writeln!(self.console, "{}", failure.error);
    }
}

/// Strips `\n` and a preceding `\r`.
fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
