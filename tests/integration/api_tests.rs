//! API integration tests
//!
//! In-process tests drive the router directly. Tests marked `#[ignore]` run
//! against a live server: cargo test -- --ignored

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use reqwest::Client;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bookcode_server::{
    api,
    config::AppConfig,
    providers::{MetadataProvider, OpenBdProvider},
    services::Services,
    AppState,
};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Router backed by the given providers
fn router(providers: Vec<Arc<dyn MetadataProvider>>) -> Router {
    let services = Services::with_providers(&AppConfig::default(), providers);
    api::create_router(AppState::new(services))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(router(vec![]), get("/api/v1/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body.get("providers").is_none());
}

#[tokio::test]
async fn test_scan_two_fields() {
    let request = post_json(
        "/api/v1/scan",
        json!({ "primary": "978-4-10-100101-2", "secondary": "1920093005804" }),
    );
    let (status, body) = send(router(vec![]), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isbn"], "9784101001012");
    assert_eq!(body["ccode"], "0093");
    assert_eq!(body["decoded"]["code"], "0093");
    assert_eq!(body["decoded"]["target"], "一般");
    assert_eq!(body["decoded"]["format"], "単行本");
    assert_eq!(body["decoded"]["content"], "日本文学、小説・物語");
}

#[tokio::test]
async fn test_scan_without_ccode() {
    let request = post_json("/api/v1/scan", json!({ "primary": "９７８４１０１００１０１２" }));
    let (status, body) = send(router(vec![]), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isbn"], "9784101001012");
    assert_eq!(body["ccode"], Value::Null);
    assert_eq!(body["decoded"], Value::Null);
}

#[tokio::test]
async fn test_scan_empty_input() {
    let request = post_json("/api/v1/scan", json!({ "primary": "   " }));
    let (status, body) = send(router(vec![]), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_scan_input_too_long() {
    let request = post_json("/api/v1/scan", json!({ "primary": "9".repeat(600) }));
    let (status, _) = send(router(vec![]), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_decode_ccode() {
    let (status, body) = send(router(vec![]), get("/api/v1/ccode/8793")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["target"], "児童");
    assert_eq!(body["format"], "絵本");
    assert_eq!(body["content"], "日本文学、小説・物語");
}

#[tokio::test]
async fn test_decode_ccode_failure() {
    for code in ["99", "abcd", "00912"] {
        let (status, body) = send(router(vec![]), get(&format!("/api/v1/ccode/{}", code))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "DecodeFailure");
    }
}

#[tokio::test]
async fn test_metadata_rejects_non_isbn() {
    let (status, _) = send(router(vec![]), get("/api/v1/isbn/0091/metadata")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lookup_with_openbd() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .and(query_param("isbn", "9784101010137"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "summary": {
                "title": "こころ",
                "publisher": "新潮社",
                "author": "夏目漱石／著"
            }
        }])))
        .mount(&server)
        .await;

    let provider = OpenBdProvider::new(reqwest::Client::new(), &server.uri());
    let app = router(vec![Arc::new(provider)]);

    let request = post_json(
        "/api/v1/lookup",
        json!({ "primary": "9784101010137", "secondary": "C0193" }),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isbn"], "9784101010137");
    assert_eq!(body["ccode"], "0193");
    assert_eq!(body["decoded"]["format"], "文庫");
    assert_eq!(body["metadata"]["openbd"]["title"], "こころ");
    assert_eq!(body["metadata"]["openbd"]["authors"], json!(["夏目漱石"]));
}

#[tokio::test]
async fn test_metadata_provider_failure_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = OpenBdProvider::new(reqwest::Client::new(), &server.uri());
    let app = router(vec![Arc::new(provider)]);

    let (status, body) = send(app, get("/api/v1/isbn/978-4-10-101013-7/metadata")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isbn"], "9784101010137");
    assert_eq!(body["metadata"], json!({ "openbd": null }));
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_live_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_live_scan() {
    let client = Client::new();

    let response = client
        .post(format!("{}/scan", BASE_URL))
        .json(&json!({ "primary": "9784101001012C0091" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["isbn"], "9784101001012");
    assert_eq!(body["ccode"], "0091");
}

#[tokio::test]
#[ignore]
async fn test_live_ready_lists_providers() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["providers"].is_array());
}
