/// Absolute URL rebuilt from a log line, ready to be replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructedRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconstruction {
    Request(ReconstructedRequest),
    Skip(SkipReason),
}

/// Why a line was passed through without being replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `GET /track` in the line.
    MissingRequestMarker,
    /// No ` HTTP/` after the request target.
    MissingProtocolMarker,
    /// Timestamp injection is on, but the line has no `[...]` field.
    MissingTimestamp,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequestMarker => "missing_request_marker",
            Self::MissingProtocolMarker => "missing_protocol_marker",
            Self::MissingTimestamp => "missing_timestamp",
        }
    }
}

/// Result of replaying (or simulating) one request.
///
/// A success always means status 200 with no failure reason, so it carries no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayOutcome {
    Succeeded,
    Failed {
        /// `0` when no response was received at all.
        status: u16,
        reason: String,
    },
}

impl ReplayOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Succeeded => 200,
            Self::Failed { status, .. } => *status,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Succeeded => None,
            Self::Failed { reason, .. } => Some(reason),
        }
    }
}

/// What happened to a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineDisposition {
    /// Dropped by the include/exclude filter. Silent.
    Rejected,
    /// Echoed to the console, not counted.
    Skipped(SkipReason),
    Replayed(ReplayOutcome),
}
