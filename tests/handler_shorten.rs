mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use urlpresser::config::SaveFailurePolicy;
use urlpresser::routes::router;

fn is_short_link(body: &str) -> bool {
    body.strip_prefix(common::BASE_URL)
        .is_some_and(|key| key.len() == 6 && key.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[tokio::test]
async fn test_shorten_text_success() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let response = server.post("/").text("https://example.com/").await;

    response.assert_status(StatusCode::CREATED);
    let body = response.text();
    assert!(is_short_link(&body), "unexpected body: {body}");
}

#[tokio::test]
async fn test_shorten_text_empty_body() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let response = server.post("/").text("").await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid request");
}

#[tokio::test]
async fn test_shorten_text_whitespace_body() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let response = server.post("/").text("  \n\t ").await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid request");
}

#[tokio::test]
async fn test_shorten_text_invalid_utf8_body() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let response = server
        .post("/")
        .bytes(Bytes::from_static(&[0x68, 0x74, 0xff, 0xfe]))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.text(), "Invalid request");
}

#[tokio::test]
async fn test_shorten_text_trims_body() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let plain = server.post("/").text("https://example.com/").await.text();
    let padded = server.post("/").text("  https://example.com/\n").await.text();

    assert_eq!(plain, padded);
}

#[tokio::test]
async fn test_shorten_text_deduplication() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let first = server.post("/").text("https://practicum.yandex.ru/").await;
    let second = server.post("/").text("https://practicum.yandex.ru/").await;

    first.assert_status(StatusCode::CREATED);
    second.assert_status(StatusCode::CREATED);
    assert_eq!(first.text(), second.text());
}

#[tokio::test]
async fn test_shorten_text_distinct_urls() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let first = server.post("/").text("https://one.example/").await.text();
    let second = server.post("/").text("https://two.example/").await.text();

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_shorten_json_success() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://practicum.yandex.ru/" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let result = json["result"].as_str().unwrap();
    assert!(is_short_link(result), "unexpected result: {result}");
}

#[tokio::test]
async fn test_shorten_json_deduplication() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dedup.example" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dedup.example" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["result"], second["result"]);
}

#[tokio::test]
async fn test_shorten_json_and_text_share_keys() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let text = server.post("/").text("https://shared.example").await.text();
    let json = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://shared.example" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["result"], text);
}

#[tokio::test]
async fn test_shorten_json_empty_body() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let response = server.post("/api/shorten").text("").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_json_malformed_body() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let response = server.post("/api/shorten").text(r#"{"url": "#).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["reason"].is_string());
}

#[tokio::test]
async fn test_shorten_json_blank_url() {
    let server = TestServer::new(router(common::create_test_state().await)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "   " }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"].get("url").is_some());
}

#[tokio::test]
async fn test_shorten_text_save_failure_returns_500() {
    let state = common::create_broken_state(SaveFailurePolicy::Fail).await;
    let server = TestServer::new(router(state.clone())).unwrap();

    let response = server.post("/").text("https://example.com/").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(state.store.is_empty().await);
}

#[tokio::test]
async fn test_shorten_json_save_failure_returns_internal_error() {
    let state = common::create_broken_state(SaveFailurePolicy::Fail).await;
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_shorten_save_failure_logged_under_log_policy() {
    let state = common::create_broken_state(SaveFailurePolicy::Log).await;
    let server = TestServer::new(router(state.clone())).unwrap();

    let response = server.post("/").text("https://example.com/").await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(state.store.len().await, 1);
}
