//! Router-level tests that need no reachable upstream

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use thumbnail_gateway::api::routes::create_router;
use thumbnail_gateway::config::Settings;
use thumbnail_gateway::AppState;
use tower::ServiceExt;

/// Nothing listens on the discard port; every outbound call fails in
/// transit.
fn unreachable_app() -> Router {
    let mut settings = Settings::default();
    settings.upstream.base_url = "http://127.0.0.1:9".to_string();
    create_router(Arc::new(AppState::new(settings)))
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("read response body")
        .to_bytes()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("response body is JSON")
}

#[tokio::test]
async fn test_health_check() {
    let response = unreachable_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_styles_transport_failure_returns_bare_error() {
    let response = unreachable_app()
        .oneshot(
            Request::builder()
                .uri("/api/styles")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
    // Callers default to an empty list themselves; no array field here.
    assert!(json.get("images").is_none());
    assert!(json.get("styles").is_none());
}

#[tokio::test]
async fn test_images_transport_failure_returns_gallery_envelope() {
    let response = unreachable_app()
        .oneshot(
            Request::builder()
                .uri("/api/gcs/images")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["images"], serde_json::json!([]));
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_generate_transport_failure_returns_bare_error() {
    let response = unreachable_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate-thumbnail")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"video_title":"My Video","style_id":1,"enhance_prompt":false}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_delete_transport_failure_returns_envelope() {
    let response = unreachable_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/gcs/delete")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"blob_name":"design/a.png"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
}
