mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use url_shortener::api::handlers::{redirect_handler, save_handler};

fn test_server(repo: Arc<common::InMemoryRepository>) -> TestServer {
    let state = common::create_test_state(repo);
    let app = Router::new()
        .route("/", post(save_handler))
        .route("/{alias}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_save_without_alias_generates_one() {
    let repo = Arc::new(common::InMemoryRepository::new());
    let server = test_server(repo.clone());

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let alias = body["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        repo.stored_url(alias),
        Some("https://example.com".to_string())
    );
}

#[tokio::test]
async fn test_save_with_custom_alias() {
    let repo = Arc::new(common::InMemoryRepository::new());
    let server = test_server(repo.clone());

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com", "alias": "google" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["alias"], "google");
    assert_eq!(
        repo.stored_url("google"),
        Some("https://example.com".to_string())
    );
}

#[tokio::test]
async fn test_save_then_redirect_roundtrip() {
    let repo = Arc::new(common::InMemoryRepository::new());
    let server = test_server(repo);

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    response.assert_status_ok();
    let alias = response.json::<serde_json::Value>()["alias"]
        .as_str()
        .unwrap()
        .to_string();

    let redirect = server.get(&format!("/{alias}")).await;

    assert_eq!(redirect.status_code(), 307);
    assert_eq!(redirect.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_duplicate_alias_is_rejected() {
    let repo = Arc::new(common::InMemoryRepository::new());
    let server = test_server(repo.clone());

    let first = server
        .post("/")
        .json(&json!({ "url": "https://example.com", "alias": "google" }))
        .await;
    first.assert_status_ok();

    let second = server
        .post("/")
        .json(&json!({ "url": "https://other.example.com", "alias": "google" }))
        .await;

    second.assert_status_bad_request();

    let body = second.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");

    // The stored record remains the one from the first call.
    assert_eq!(
        repo.stored_url("google"),
        Some("https://example.com".to_string())
    );
}

#[tokio::test]
async fn test_malformed_url_never_reaches_storage() {
    let repo = Arc::new(common::InMemoryRepository::new());
    let server = test_server(repo.clone());

    let response = server
        .post("/")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(repo.save_calls(), 0);
}

#[tokio::test]
async fn test_empty_url_never_reaches_storage() {
    let repo = Arc::new(common::InMemoryRepository::new());
    let server = test_server(repo.clone());

    let response = server.post("/").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
    assert_eq!(repo.save_calls(), 0);
}

#[tokio::test]
async fn test_empty_alias_never_reaches_storage() {
    let repo = Arc::new(common::InMemoryRepository::new());
    let server = test_server(repo.clone());

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(repo.save_calls(), 0);
}

#[tokio::test]
async fn test_storage_failure_is_a_generic_500() {
    let repo = Arc::new(common::InMemoryRepository::new());
    repo.set_fail(true);
    let server = test_server(repo);

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 500);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "internal_error");
}
