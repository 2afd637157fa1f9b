mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use url_shortener::config::Environment;

fn make_server() -> TestServer {
    common::make_server(Environment::Production)
}

// ─── SUCCESS ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_shorten_success() {
    let server = make_server();

    let response = server
        .post("/api/url")
        .json(&json!({ "longUrl": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["shortCode"].as_str().unwrap();

    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["shortUrl"], format!("{}/{}", common::BASE_URL, code));
    assert_eq!(json["longUrl"], "https://example.com/some/long/path");
}

#[tokio::test]
async fn test_shorten_response_has_only_view_fields() {
    let server = make_server();

    let response = server
        .post("/api/url")
        .json(&json!({ "longUrl": "https://example.com" }))
        .await;

    let json = response.json::<serde_json::Value>();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), 3);
    assert!(object.contains_key("shortCode"));
    assert!(object.contains_key("shortUrl"));
    assert!(object.contains_key("longUrl"));
}

#[tokio::test]
async fn test_shorten_root_alias() {
    let server = make_server();

    let response = server
        .post("/")
        .json(&json!({ "longUrl": "http://example.org/page?x=1&y=2" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<serde_json::Value>()["longUrl"],
        "http://example.org/page?x=1&y=2"
    );
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_distinct_codes() {
    let server = make_server();
    let body = json!({ "longUrl": "https://example.com/dup" });

    let first = server.post("/api/url").json(&body).await;
    let second = server.post("/api/url").json(&body).await;

    first.assert_status(StatusCode::CREATED);
    second.assert_status(StatusCode::CREATED);
    assert_ne!(
        first.json::<serde_json::Value>()["shortCode"],
        second.json::<serde_json::Value>()["shortCode"]
    );
}

// ─── VALIDATION ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = make_server();

    let response = server
        .post("/api/url")
        .json(&json!({ "longUrl": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "Must be a valid URL" }));
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = make_server();

    let response = server
        .post("/api/url")
        .json(&json!({ "longUrl": "" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "Must be a valid URL" }));
}

#[tokio::test]
async fn test_shorten_missing_field() {
    let server = make_server();

    let response = server.post("/api/url").json(&json!({})).await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "error": "Must be a valid URL" }));
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let server = make_server();

    let response = server
        .post("/api/url")
        .content_type("application/json")
        .text("{ not json")
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<serde_json::Value>()["error"].is_string());
}

#[tokio::test]
async fn test_shorten_missing_content_type() {
    let server = make_server();

    let response = server
        .post("/api/url")
        .text(r#"{"longUrl":"https://example.com"}"#)
        .await;

    response.assert_status_bad_request();
}

// ─── STORAGE ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_shorten_store_unavailable() {
    let state = common::state_with_repository(
        std::sync::Arc::new(common::UnavailableRepository),
        Environment::Production,
    );
    let server = common::server_for(state);

    let response = server
        .post("/api/url")
        .json(&json!({ "longUrl": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Failed to find URL" }));
}
