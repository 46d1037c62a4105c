//! HTTP request handlers for styles, generation, and health

use crate::api::envelope;
use crate::api::models::{GenerationRequest, GenerationResult, HealthResponse, Style};
use crate::api::normalize::normalize_styles;
use crate::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// List the rendering styles known to the upstream engine.
///
/// The upstream payload is normalized to a bare array. Upstream failures
/// pass through with their own status; callers treat the listing as
/// array-or-nothing, so local failures return `{ error }` without an
/// array field.
#[utoipa::path(
    get,
    path = "/api/styles",
    tag = "Styles",
    responses(
        (status = 200, description = "Bare array of styles", body = [Style]),
        (status = 500, description = "Gateway could not reach or decode the upstream"),
    )
)]
pub async fn list_styles(State(state): State<Arc<AppState>>) -> Response {
    let resp = match state.upstream.get("/styles").await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(error = %e, "Styles request failed in transit");
            return envelope::internal_error(&e.to_string());
        }
    };

    let status = resp.status();
    if !status.is_success() {
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => return envelope::internal_error(&e.to_string()),
        };
        warn!(status = status.as_u16(), "Upstream rejected styles request");
        return (
            envelope::forward_status(status),
            envelope::upstream_error_text(text),
        )
            .into_response();
    }

    match resp.json::<Value>().await {
        Ok(payload) => Json(normalize_styles(payload)).into_response(),
        Err(e) => envelope::internal_error(&e.to_string()),
    }
}

/// Generate a thumbnail for a video title.
///
/// The request body is forwarded unchanged; on success the upstream JSON
/// comes back unreshaped so the UI sees the engine's own fields. Upstream
/// failures pass through as raw text at the upstream's status.
#[utoipa::path(
    post,
    path = "/api/generate-thumbnail",
    tag = "Generation",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generation result", body = GenerationResult),
        (status = 500, description = "Gateway could not reach or decode the upstream"),
    )
)]
pub async fn generate_thumbnail(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerationRequest>,
) -> Response {
    info!(
        video_title = %request.video_title,
        style_id = request.style_id,
        enhance_prompt = request.enhance_prompt,
        "Forwarding generation request"
    );

    let resp = match state.upstream.post_json("/generate-thumbnail", &request).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(error = %e, "Generation request failed in transit");
            return envelope::internal_error(&e.to_string());
        }
    };

    let status = resp.status();
    if !status.is_success() {
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => return envelope::internal_error(&e.to_string()),
        };
        warn!(status = status.as_u16(), "Upstream rejected generation request");
        return (
            envelope::forward_status(status),
            envelope::upstream_error_text(text),
        )
            .into_response();
    }

    match resp.json::<Value>().await {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => envelope::internal_error(&e.to_string()),
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Gateway is running", body = HealthResponse),
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream: state.upstream.base_url().to_string(),
    })
}
