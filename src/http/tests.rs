//! Tests for the request executor and retry wrapper

use super::retry_hint;
use crate::api::models::codes;
use crate::client::Client;
use crate::config::{ClientConfig, RetryOverrides};
use crate::error::Error;
use crate::response::{Envelope, RequestBody, RequestContext};
use crate::schema::{Auth, Operation};
use crate::types::{JsonValue, Method, StringMap};
use pretty_assertions::assert_eq;
use test_case::test_case;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

static ECHO: Operation = Operation {
    name: "echo",
    description: "Echo a payload",
    method: Method::POST,
    path: "/echo",
    path_params: &[],
    query_params: &[],
    body_params: &[],
    returns: &[],
    auth: Auth::None,
};

/// Matches requests that do NOT carry the given header
struct NoHeader(&'static str);

impl Match for NoHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key(self.0)
    }
}

fn client_for(server: &MockServer, token: Option<&str>) -> Client {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .build()
        .unwrap();
    Client::with_config(token.map(ToString::to_string), config)
}

fn error_body(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({ "message": message, "code": code, "fields": {} })
}

// ============================================================================
// Authorization header
// ============================================================================

#[tokio::test]
async fn test_scoped_operation_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account"))
        .and(header("authorization", "Bearer token_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "user_1", "password": true, "group": "default", "permissions": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("token_abc"));
    let details = client.account().get().await.unwrap();
    assert_eq!(details.data.id, "user_1");
}

#[tokio::test]
async fn test_unauthenticated_operation_never_sends_token() {
    let server = MockServer::start().await;

    // A token is configured, but the operation declares no requirement
    Mock::given(method("GET"))
        .and(path("/newsletter"))
        .and(NoHeader("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [], "total": 0, "limit": 10, "page": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("token_abc"));
    client.newsletters().list(10, 1).await.unwrap();
}

#[tokio::test]
async fn test_scoped_operation_without_token_still_reaches_the_server() {
    let server = MockServer::start().await;

    // No Authorization header; the server decides the auth failure
    Mock::given(method("GET"))
        .and(path("/account"))
        .and(NoHeader("authorization"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(error_body(codes::UNAUTHORIZED, "No token provided")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.account().get().await.unwrap_err();
    assert_eq!(err.api_code(), Some(codes::UNAUTHORIZED));
    assert_eq!(err.api_status(), Some(401));
}

#[tokio::test]
async fn test_any_token_operation_attaches_token_when_present() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("authorization", "Bearer session_token"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({ "session": "ses_1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("session_token"));
    let session = client.auth().login("someone", "hunter2hunter22").await.unwrap();
    assert_eq!(session.data.session, "ses_1");
}

// ============================================================================
// URL building and body encoding
// ============================================================================

#[tokio::test]
async fn test_path_placeholders_are_substituted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/newsletter/news_42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "news_42", "name": "Weekly", "data": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let newsletter = client.newsletters().get("news_42").await.unwrap();
    assert_eq!(newsletter.data.id, "news_42");
}

#[tokio::test]
async fn test_json_body_is_sent_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/newsletter/news_1/subscribe"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "email": "reader@example.com" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "sub_1", "email": "reader@example.com", "newsletter": "news_1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let subscription = client
        .newsletters()
        .subscribe("news_1", "reader@example.com", None)
        .await
        .unwrap();
    assert_eq!(subscription.data.id, "sub_1");
    assert_eq!(subscription.status(), 201);
}

#[tokio::test]
async fn test_string_body_is_sent_as_plain_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/echo"))
        .and(header("content-type", "text/plain"))
        .and(body_string("hello"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let ctx = RequestContext::new(
        &ECHO,
        StringMap::new(),
        StringMap::new(),
        Some(RequestBody::Text("hello".to_string())),
    );
    let echoed: Envelope<String> = client.call(ctx, None).await.unwrap();
    // Non-JSON content type decodes as raw text
    assert_eq!(echoed.data, "hello");
}

#[test]
fn test_operation_url_substitution_and_query() {
    let config = ClientConfig::builder()
        .base_url("https://api.example.com/v5")
        .build()
        .unwrap();
    let client = Client::with_config(None, config);

    static OP: Operation = Operation {
        name: "tokens.list_requests",
        description: "",
        method: Method::GET,
        path: "/token/:id/requests",
        path_params: &[],
        query_params: &[],
        body_params: &[],
        returns: &[],
        auth: Auth::None,
    };
    let mut path_params = StringMap::new();
    path_params.insert("id".to_string(), "current".to_string());
    let mut query = StringMap::new();
    query.insert("limit".to_string(), "10".to_string());
    let ctx = RequestContext::new(&OP, path_params, query, None);

    let url = client.operation_url(&ctx).unwrap();
    assert_eq!(url.path(), "/v5/token/current/requests");
    assert_eq!(url.query(), Some("limit=10"));
}

// ============================================================================
// Response classification
// ============================================================================

#[tokio::test]
async fn test_204_yields_empty_data_with_inspectable_status() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/projects/proj_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("token_abc"));
    let deleted = client.projects().delete("proj_1").await.unwrap();
    let () = deleted.data;
    assert_eq!(deleted.meta.status, 204);
    assert!(deleted.meta.ok);
}

#[tokio::test]
async fn test_error_envelope_carries_code_fields_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/newsletter/news_1/subscribe"))
        .respond_with(
            ResponseTemplate::new(422)
                .insert_header("X-Request-Id", "req_9")
                .set_body_json(serde_json::json!({
                    "message": "Invalid data",
                    "code": "INVALID_DATA",
                    "fields": { "email": "Invalid e-mail address" }
                })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client
        .newsletters()
        .subscribe("news_1", "not-an-email", None)
        .await
        .unwrap_err();

    let response = err.as_api().unwrap();
    assert_eq!(response.status(), 422);
    assert_eq!(response.code(), Some(codes::INVALID_DATA));
    assert_eq!(response.message(), Some("Invalid data"));
    // Header keys are lower-cased
    assert_eq!(response.header("x-request-id"), Some("req_9"));
    assert!(response.error.as_ref().unwrap().fields.contains_key("email"));
    // The originating request context is retained
    assert_eq!(response.meta.request.operation.name, "newsletters.subscribe");
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_raw() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/newsletter"))
        .respond_with(
            ResponseTemplate::new(503)
                .insert_header("content-type", "text/html")
                .set_body_string("<html>down</html>"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.newsletters().list(10, 1).await.unwrap_err();
    let response = err.as_api().unwrap();
    assert_eq!(response.code(), None);
    assert_eq!(
        response.body,
        JsonValue::String("<html>down</html>".to_string())
    );
}

// ============================================================================
// Retry hints
// ============================================================================

fn headers(entries: &[(&str, &str)]) -> StringMap {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test_case(503, &[("x-retry-after", "2")], Some(2.0); "general x-retry-after")]
#[test_case(503, &[("retry-after", "3")], Some(3.0); "general retry-after")]
#[test_case(503, &[("x-ratelimit-reset", "4")], None; "general ignores reset headers")]
#[test_case(429, &[("x-ratelimit-reset", "4"), ("retry-after", "9")], Some(4.0); "rate limited prefers reset")]
#[test_case(429, &[("rate-limit-reset", "1.5")], Some(1.5); "fractional seconds")]
#[test_case(429, &[("retry-after", "9")], Some(9.0); "rate limited falls back to retry-after")]
#[test_case(429, &[("x-ratelimit-reset", "soon")], None; "unparsable hint")]
#[test_case(429, &[], None; "no hint")]
fn test_retry_hint(status: u16, entries: &[(&str, &str)], expected: Option<f64>) {
    assert_eq!(retry_hint(status, &headers(entries)), expected);
}

// ============================================================================
// Retry behavior
// ============================================================================

#[tokio::test]
async fn test_rate_limited_call_is_retried_after_hint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/newsletter"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("x-ratelimit-reset", "0")
                .set_body_json(error_body(codes::RATE_LIMITED, "Slow down")),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/newsletter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [], "total": 0, "limit": 10, "page": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let response = client.newsletters().list(10, 1).await;
    tokio_test::assert_ok!(response);
}

#[tokio::test]
async fn test_retry_waits_for_the_hinted_delay() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/newsletter"))
        .respond_with(
            ResponseTemplate::new(503)
                .insert_header("retry-after", "1")
                .set_body_json(error_body(codes::MAINTENANCE, "Down for maintenance")),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/newsletter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [], "total": 0, "limit": 10, "page": 1
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let started = std::time::Instant::now();
    client.newsletters().list(10, 1).await.unwrap();
    assert!(started.elapsed() >= std::time::Duration::from_secs(1));
}

#[tokio::test]
async fn test_hint_above_max_delay_surfaces_immediately() {
    let server = MockServer::start().await;

    // 10s exceeds the default 5s bound; exactly one attempt
    Mock::given(method("GET"))
        .and(path("/newsletter"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("x-ratelimit-reset", "10")
                .set_body_json(error_body(codes::RATE_LIMITED, "Slow down")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.newsletters().list(10, 1).await.unwrap_err();
    assert_eq!(err.api_code(), Some(codes::RATE_LIMITED));
}

#[tokio::test]
async fn test_missing_hint_surfaces_immediately() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/newsletter"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(error_body(codes::INTERNAL_SERVER_ERROR, "Boom")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.newsletters().list(10, 1).await.unwrap_err();
    assert_eq!(err.api_code(), Some(codes::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn test_retry_budget_is_exhausted_then_failure_surfaces() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/newsletter"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("x-ratelimit-reset", "0")
                .set_body_json(error_body(codes::RATE_LIMITED, "Slow down")),
        )
        .expect(3)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .base_url(server.uri())
        .max_retries(2)
        .build()
        .unwrap();
    let client = Client::with_config(None, config);

    let err = client.newsletters().list(10, 1).await.unwrap_err();
    assert_eq!(err.api_code(), Some(codes::RATE_LIMITED));
}

#[tokio::test]
async fn test_auto_retry_disabled_per_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/newsletter"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("x-ratelimit-reset", "0")
                .set_body_json(error_body(codes::RATE_LIMITED, "Slow down")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let mut query = StringMap::new();
    query.insert("limit".to_string(), "10".to_string());
    query.insert("page".to_string(), "1".to_string());

    static LIST: Operation = Operation {
        name: "newsletters.list",
        description: "List newsletters",
        method: Method::GET,
        path: "/newsletter",
        path_params: &[],
        query_params: &[],
        body_params: &[],
        returns: &[],
        auth: Auth::None,
    };
    let ctx = RequestContext::new(&LIST, StringMap::new(), query, None);
    let overrides = RetryOverrides::new().auto_retry(false);

    let result: crate::error::Result<Envelope<JsonValue>> =
        client.call(ctx, Some(&overrides)).await;
    tokio_test::assert_err!(result);
}

#[tokio::test]
async fn test_transport_failures_are_not_retried() {
    // Nothing listens here; connection is refused without a server hint
    let config = ClientConfig::builder()
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();
    let client = Client::with_config(None, config);

    let err = client.newsletters().list(10, 1).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}
