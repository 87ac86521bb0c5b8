use std::time::Duration;

/// Start of a replayable request in an access-log line.
pub const REQUEST_MARKER: &str = "GET /track";
/// The request target starts right after `GET `.
pub const REQUEST_PATH_OFFSET: usize = "GET ".len();
/// End of the request target.
pub const PROTOCOL_MARKER: &str = " HTTP/";

/// Layout of the bracketed access-log timestamp, e.g. `10/Oct/2023:13:55:36 -0700`.
pub const ACCESS_LOG_TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";
pub const TIMESTAMP_QUERY_KEY: &str = "&timestamp=";

/// Reason recorded for any response that is not a 200.
pub const UNKNOWN_FAILURE_REASON: &str = "Unknown";

/// Fixed pause after every replay attempt. Constant rate, never adaptive.
pub const THROTTLE: Duration = Duration::from_millis(2);
