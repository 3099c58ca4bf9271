//! Tests for the response module

use super::*;
use crate::api::models::ApiErrorBody;
use crate::schema::{Auth, Operation};
use crate::types::{JsonValue, Method, StringMap};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use test_case::test_case;

static PING: Operation = Operation {
    name: "ping",
    description: "Ping",
    method: Method::GET,
    path: "/ping",
    path_params: &[],
    query_params: &[],
    body_params: &[],
    returns: &[],
    auth: Auth::None,
};

fn meta(status: u16, status_text: &str) -> ResponseMeta {
    ResponseMeta {
        status,
        status_text: status_text.to_string(),
        ok: (200..300).contains(&status),
        redirected: false,
        url: url::Url::parse("https://api.example.com/ping").unwrap(),
        headers: StringMap::new(),
        request: RequestContext::bare(&PING),
    }
}

// ============================================================================
// Date revival
// ============================================================================

#[test_case("2023-04-05T06:07:08Z", true; "zulu")]
#[test_case("2023-04-05T06:07:08.123Z", true; "fractional")]
#[test_case("2023-04-05T06:07:08+02:00", true; "offset")]
#[test_case("2023-04-05T06:07:08", true; "zoneless")]
#[test_case("2023-04-05", false; "date only")]
#[test_case("06:07:08", false; "time only")]
#[test_case("not a date", false; "plain text")]
#[test_case("20230405T060708Z", false; "compact form")]
fn test_datetime_pattern(input: &str, expected: bool) {
    assert_eq!(dates::looks_like_datetime(input), expected);
}

#[test]
fn test_parse_datetime_normalizes_to_utc() {
    let parsed = dates::parse_datetime("2023-04-05T06:07:08+02:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 4, 5, 4, 7, 8).unwrap());

    let zoneless = dates::parse_datetime("2023-04-05T06:07:08").unwrap();
    assert_eq!(zoneless, Utc.with_ymd_and_hms(2023, 4, 5, 6, 7, 8).unwrap());
}

#[test]
fn test_parse_datetime_rejects_non_matching() {
    assert!(dates::parse_datetime("yesterday").is_none());
    assert!(dates::parse_datetime("2023-04-05").is_none());
}

// ============================================================================
// Body decoding
// ============================================================================

#[test]
fn test_decode_204_is_empty() {
    let value = decode_body(204, Some("application/json"), "").unwrap();
    assert_eq!(value, JsonValue::Null);
}

#[test]
fn test_decode_json_content_type() {
    let value = decode_body(200, Some("application/json; charset=utf-8"), "{\"a\":1}").unwrap();
    assert_eq!(value, serde_json::json!({"a": 1}));
}

#[test]
fn test_decode_non_json_is_raw_text() {
    let value = decode_body(200, Some("text/html"), "<html></html>").unwrap();
    assert_eq!(value, JsonValue::String("<html></html>".to_string()));

    // JSON-looking text without the content type stays text
    let value = decode_body(200, None, "{\"a\":1}").unwrap();
    assert_eq!(value, JsonValue::String("{\"a\":1}".to_string()));
}

#[test]
fn test_decode_invalid_json_is_an_error() {
    let result = decode_body(200, Some("application/json"), "{oops");
    assert!(matches!(result, Err(crate::Error::Decode { .. })));
}

// ============================================================================
// Envelopes
// ============================================================================

#[test]
fn test_envelope_keeps_data_shape() {
    let envelope = Envelope::new(vec![1u32, 2, 3], meta(200, "OK"));
    assert_eq!(envelope.data, vec![1, 2, 3]);
    assert_eq!(envelope.status(), 200);
}

#[test]
fn test_error_response_display_with_body() {
    let response = ErrorResponse {
        error: Some(ApiErrorBody {
            message: "You are being rate limited".to_string(),
            code: "RATE_LIMITED".to_string(),
            fields: Default::default(),
        }),
        body: JsonValue::Null,
        meta: meta(429, "Too Many Requests"),
    };
    assert_eq!(
        response.to_string(),
        "API error 429 RATE_LIMITED: You are being rate limited"
    );
    assert_eq!(response.code(), Some("RATE_LIMITED"));
}

#[test]
fn test_error_response_display_without_body() {
    let response = ErrorResponse {
        error: None,
        body: JsonValue::String("<html>maintenance</html>".to_string()),
        meta: meta(503, "Service Unavailable"),
    };
    assert_eq!(response.to_string(), "API error 503 Service Unavailable");
    assert_eq!(response.code(), None);
}
