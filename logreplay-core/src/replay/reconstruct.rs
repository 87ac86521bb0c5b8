use crate::replay::constants::{
    PROTOCOL_MARKER, REQUEST_MARKER, REQUEST_PATH_OFFSET, TIMESTAMP_QUERY_KEY,
};
use crate::replay::error::TimestampError;
use crate::replay::timestamp::extract_timestamp;
use crate::replay::types::{ReconstructedRequest, Reconstruction, SkipReason};

/// Rebuilds the replay URL for a log line.
///
/// The request target is everything between `GET ` and the next ` HTTP/`, appended
/// verbatim to `base_url`. With `include_timestamp`, the original request time is
/// appended as `&timestamp=<epoch-ms>`.
///
/// Lines that don't carry a trackable request come back as `Reconstruction::Skip`.
/// Only an unparsable timestamp field is an error.
pub fn build_request(
    line: &str,
    base_url: &str,
    include_timestamp: bool,
) -> Result<Reconstruction, TimestampError> {
    let Some(marker) = line.find(REQUEST_MARKER) else {
        return Ok(Reconstruction::Skip(SkipReason::MissingRequestMarker));
    };

    let start = marker + REQUEST_PATH_OFFSET;

    let end = match line[start..].find(PROTOCOL_MARKER) {
        Some(offset) if offset > 0 => start + offset,
        _ => return Ok(Reconstruction::Skip(SkipReason::MissingProtocolMarker)),
    };

    let mut url = String::with_capacity(base_url.len() + (end - start) + 32);
    url.push_str(base_url);
    url.push_str(&line[start..end]);

    if include_timestamp {
        let Some(millis) = extract_timestamp(line)? else {
            return Ok(Reconstruction::Skip(SkipReason::MissingTimestamp));
        };
        url.push_str(TIMESTAMP_QUERY_KEY);
        url.push_str(&millis.to_string());
    }

    Ok(Reconstruction::Request(ReconstructedRequest { url }))
}
