use crate::replay::constants::ACCESS_LOG_TIME_FORMAT;
use crate::replay::error::{TimestampError, TimestampErrorReason};
use chrono::DateTime;

/// Extracts the bracketed access-log timestamp as UTC epoch milliseconds.
///
/// Returns `Ok(None)` when the line has no `[` ... `]` pair (first `[` must come
/// before first `]`). A field that is present but does not follow
/// `dd/Mon/yyyy:HH:MM:SS ±HHMM` is an error.
///
/// The source format has second precision, so the result is always a multiple of 1000.
pub fn extract_timestamp(line: &str) -> Result<Option<i64>, TimestampError> {
    let (Some(open), Some(close)) = (line.find('['), line.find(']')) else {
        return Ok(None);
    };

    if close <= open {
        return Ok(None);
    }

    let field = &line[open + 1..close];

    let error = |reason| TimestampError {
        field: field.to_string(),
        reason,
    };

    if !has_access_log_layout(field) {
        return Err(error(TimestampErrorReason::Layout));
    }

    let parsed = DateTime::parse_from_str(field, ACCESS_LOG_TIME_FORMAT)
        .map_err(|source| error(TimestampErrorReason::Parse(source)))?;

    Ok(Some(parsed.timestamp() * 1000))
}

/// Exact `dd/Mon/yyyy:HH:MM:SS +hhmm` shape. chrono alone also takes a
/// one-digit day, `-07:00` offsets and repeated spaces.
fn has_access_log_layout(field: &str) -> bool {
    let b = field.as_bytes();

    b.len() == 26
        && b[0].is_ascii_digit()
        && b[1].is_ascii_digit()
        && b[2] == b'/'
        && b[6] == b'/'
        && b[11] == b':'
        && b[20] == b' '
        && matches!(b[21], b'+' | b'-')
        && b[22..26].iter().all(u8::is_ascii_digit)
}
