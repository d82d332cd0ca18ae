//! HTTP-level tests for the router
//!
//! Requests are driven through `tower::ServiceExt::oneshot` against a router
//! built on a stub model, so no network access is needed.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use common::{retrain_tool_call, StubModel};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use translation_backend::api;
use translation_backend::flows::InMemoryCorrectionSink;
use translation_backend::orchestrator::{ModelClient, ModelResponse};
use translation_backend::state::AppState;

fn app(model: Arc<dyn ModelClient>) -> Router {
    let state = AppState::new(model, Arc::new(InMemoryCorrectionSink::new()), 1_000).unwrap();
    api::router(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(
        app(StubModel::replying(ModelResponse::default())),
        get("/api/health"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_languages() {
    let (status, body) = send(
        app(StubModel::replying(ModelResponse::default())),
        get("/api/languages"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"name": "Nepali", "locale": "ne-NP"},
            {"name": "Sinhalese", "locale": "si-LK"}
        ])
    );
}

#[tokio::test]
async fn test_translate_success() {
    let (status, body) = send(
        app(StubModel::replying(ModelResponse::text("Hello"))),
        post_json(
            "/api/translate",
            json!({"text": "नमस्ते", "sourceLanguage": "Nepali"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"translatedText": "Hello"}));
}

#[tokio::test]
async fn test_translate_empty_text_is_bad_request() {
    let model = StubModel::replying(ModelResponse::text("unused"));
    let (status, body) = send(
        app(model.clone()),
        post_json(
            "/api/translate",
            json!({"text": "", "sourceLanguage": "Nepali"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("text"));
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_translate_unknown_language_is_bad_request() {
    let (status, _) = send(
        app(StubModel::replying(ModelResponse::text("unused"))),
        post_json(
            "/api/translate",
            json!({"text": "hola", "sourceLanguage": "Spanish"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_translate_model_failure_is_bad_gateway() {
    let (status, body) = send(
        app(StubModel::failing("Gemini API rate limit exceeded (HTTP 429)")),
        post_json(
            "/api/translate",
            json!({"text": "नमस्ते", "sourceLanguage": "Nepali"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("429"));
}

#[tokio::test]
async fn test_retrain_success() {
    let (status, body) = send(
        app(StubModel::replying(retrain_tool_call("नमस्ते", "Hello"))),
        post_json(
            "/api/retrain",
            json!({"originalText": "नमस्ते", "translatedText": "Hello"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Model retraining simulated successfully."})
    );
}

#[tokio::test]
async fn test_retrain_invalid_body_reports_failure_with_ok_status() {
    let model = StubModel::replying(retrain_tool_call("नमस्ते", "Hello"));
    let (status, body) = send(
        app(model.clone()),
        post_json("/api/retrain", json!({"originalText": "नमस्ते"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("translatedText"));
    assert_eq!(model.calls(), 0);
}
