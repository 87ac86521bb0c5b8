use super::test_helpers::TRACK_LINE;
use crate::replay::{ReconstructedRequest, Reconstruction, SkipReason, build_request};
use pretty_assertions::assert_eq;

fn assert_url(line: &str, include_timestamp: bool, expected: &str) {
    // Act
    let result = build_request(line, "https://example.com", include_timestamp).unwrap();

    // Assert
    assert_eq!(
        result,
        Reconstruction::Request(ReconstructedRequest {
            url: expected.to_string()
        })
    );
}

fn assert_skip(line: &str, include_timestamp: bool, expected: SkipReason) {
    let result = build_request(line, "https://example.com", include_timestamp).unwrap();

    assert_eq!(result, Reconstruction::Skip(expected));
}

#[test]
fn appends_request_target_to_base_url() {
    assert_url(TRACK_LINE, false, "https://example.com/track?x=1");
}

#[test]
fn appends_timestamp_when_enabled() {
    assert_url(
        TRACK_LINE,
        true,
        "https://example.com/track?x=1&timestamp=1696971336000",
    );
}

#[test]
fn keeps_path_segments_and_query_verbatim() {
    let line = r#"[10/Oct/2023:13:55:36 -0700] "GET /track/v2/event?a=%20b&c=d HTTP/2.0" 204"#;

    assert_url(line, false, "https://example.com/track/v2/event?a=%20b&c=d");
}

#[test]
fn base_url_is_not_normalized() {
    let result = build_request(TRACK_LINE, "http://10.0.0.1:8080/prefix", false).unwrap();

    assert_eq!(
        result,
        Reconstruction::Request(ReconstructedRequest {
            url: "http://10.0.0.1:8080/prefix/track?x=1".to_string()
        })
    );
}

#[test]
fn non_track_requests_are_skipped() {
    assert_skip(
        r#"[10/Oct/2023:13:55:36 -0700] "GET /health HTTP/1.1" 200"#,
        false,
        SkipReason::MissingRequestMarker,
    );
    assert_skip(
        r#"[10/Oct/2023:13:55:36 -0700] "POST /track HTTP/1.1" 200"#,
        false,
        SkipReason::MissingRequestMarker,
    );
}

#[test]
fn missing_protocol_is_skipped() {
    assert_skip(
        r#"[10/Oct/2023:13:55:36 -0700] "GET /track?x=1" 400"#,
        false,
        SkipReason::MissingProtocolMarker,
    );
}

#[test]
fn protocol_marker_before_request_is_ignored() {
    // The end marker is only searched after the start of the path.
    assert_skip(
        r#"referer= HTTP/1.0 "GET /track?x=1"#,
        false,
        SkipReason::MissingProtocolMarker,
    );
}

#[test]
fn missing_timestamp_is_skipped_when_required() {
    let line = r#"1.2.3.4 "GET /track?x=1 HTTP/1.1" 200"#;

    assert_skip(line, true, SkipReason::MissingTimestamp);
    assert_url(line, false, "https://example.com/track?x=1");
}

#[test]
fn unparsable_timestamp_is_an_error() {
    let line = r#"1.2.3.4 [10-10-2023 13:55] "GET /track?x=1 HTTP/1.1" 200"#;

    assert!(build_request(line, "https://example.com", true).is_err());
    // Without injection the timestamp is never looked at.
    assert!(build_request(line, "https://example.com", false).is_ok());
}
