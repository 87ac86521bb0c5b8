use crate::replay::render::render_summary;
use crate::replay::types::ReplayOutcome;
use std::io::{self, Write};

/// Counters for one run. Skipped and rejected lines are not part of `total`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStatistics {
    pub total: u64,
    pub succeeded: u64,
    pub failed: u64,
}

#[derive(Debug, Default)]
pub struct StatsAggregator {
    total_seen: u64,
    succeeded: u64,
    failed: u64,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn increment(&mut self, outcome: &ReplayOutcome) {
        self.total_seen += 1;

        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn snapshot(&self) -> RunStatistics {
        RunStatistics {
            total: self.total_seen,
            succeeded: self.succeeded,
            failed: self.failed,
        }
    }

    pub fn report(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(render_summary(&self.snapshot()).as_bytes())
    }
}
