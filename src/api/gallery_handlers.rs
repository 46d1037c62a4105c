//! HTTP request handlers for the image gallery (list, upload, delete)

use crate::api::envelope;
use crate::api::models::{DeleteImageRequest, GalleryResponse, ImagesQuery};
use crate::upstream::{encode_blob_path, encode_component};
use crate::AppState;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// List gallery images, optionally filtered by style.
///
/// A present, non-empty `style` query selects `gcs/images/{style}`
/// upstream; otherwise the unfiltered listing is fetched. The upstream
/// JSON is forwarded as-is. Local failures owe the caller the
/// `{ success: false, images: [], error }` envelope so array-consuming UI
/// code never needs a null check.
#[utoipa::path(
    get,
    path = "/api/gcs/images",
    tag = "Gallery",
    params(ImagesQuery),
    responses(
        (status = 200, description = "Gallery listing", body = GalleryResponse),
        (status = 500, description = "Envelope with an empty images array"),
    )
)]
pub async fn list_images(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ImagesQuery>,
) -> Response {
    let path = match query.style.as_deref() {
        Some(style) if !style.is_empty() => format!("gcs/images/{}", encode_component(style)),
        _ => "gcs/images".to_string(),
    };

    let resp = match state.upstream.get(&path).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(error = %e, "Gallery listing failed in transit");
            return envelope::gallery_error(&e.to_string());
        }
    };

    let status = resp.status();
    if !status.is_success() {
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => return envelope::gallery_error(&e.to_string()),
        };
        warn!(status = status.as_u16(), "Upstream rejected gallery listing");
        return (
            envelope::forward_status(status),
            envelope::upstream_error_text(text),
        )
            .into_response();
    }

    match resp.json::<Value>().await {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => envelope::gallery_error(&e.to_string()),
    }
}

/// Upload an image to the gallery.
///
/// Byte-transparent passthrough: the inbound multipart `file` field (and
/// `style`, defaulting to `design`) is re-wrapped into an outbound form,
/// and the upstream's status and raw text body come back unmodified.
#[utoipa::path(
    post,
    path = "/api/gcs/upload",
    tag = "Gallery",
    responses(
        (status = 200, description = "Upstream response, forwarded verbatim"),
        (status = 400, description = "No file field in the multipart body"),
        (status = 500, description = "Plain-text failure message"),
    )
)]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    let mut file: Option<Part> = None;
    let mut style = String::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = match field.bytes().await {
                    Ok(data) => data,
                    Err(e) => {
                        return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                            .into_response()
                    }
                };

                let mut part = Part::bytes(data.to_vec());
                if let Some(file_name) = file_name {
                    part = part.file_name(file_name);
                }
                if let Some(content_type) = content_type {
                    part = match part.mime_str(&content_type) {
                        Ok(part) => part,
                        Err(e) => {
                            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                                .into_response()
                        }
                    };
                }
                file = Some(part);
            }
            "style" => {
                let text = match field.text().await {
                    Ok(text) => text,
                    Err(e) => {
                        return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                            .into_response()
                    }
                };
                if !text.is_empty() {
                    style = text;
                }
            }
            _ => {}
        }
    }

    let Some(file) = file else {
        return (StatusCode::BAD_REQUEST, "Missing file").into_response();
    };
    if style.is_empty() {
        style = "design".to_string();
    }

    info!(style = %style, "Forwarding gallery upload");

    let form = Form::new().part("file", file).text("style", style);
    let resp = match state.upstream.post_form("gcs/upload", form).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(error = %e, "Gallery upload failed in transit");
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    let status = envelope::forward_status(resp.status());
    match resp.text().await {
        Ok(text) => (status, text).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// Delete a gallery image by blob name.
///
/// The identifier arrives in the JSON body because it may contain `/`
/// characters; each segment is percent-encoded independently before the
/// upstream DELETE. Upstream JSON passes through at the upstream status;
/// non-JSON bodies are synthesized into `{ success, message, error }`
/// because the upstream's own contract for this endpoint is inconsistent.
#[utoipa::path(
    post,
    path = "/api/gcs/delete",
    tag = "Gallery",
    request_body = DeleteImageRequest,
    responses(
        (status = 200, description = "Upstream JSON or synthesized envelope"),
        (status = 400, description = "Missing blob_name"),
        (status = 500, description = "Envelope with the failure message"),
    )
)]
pub async fn delete_image(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DeleteImageRequest>,
) -> Response {
    let blob_name = match request.blob_name {
        Some(blob_name) if !blob_name.is_empty() => blob_name,
        _ => return envelope::missing_field("Missing blob_name"),
    };

    info!(blob_name = %blob_name, "Forwarding gallery delete");

    let path = format!("gcs/images/{}", encode_blob_path(&blob_name));
    let resp = match state.upstream.delete(&path).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(error = %e, "Gallery delete failed in transit");
            return envelope::internal_envelope(&e.to_string());
        }
    };

    let status = envelope::forward_status(resp.status());
    let text = match resp.text().await {
        Ok(text) => text,
        Err(e) => return envelope::internal_envelope(&e.to_string()),
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => (status, Json(json)).into_response(),
        Err(_) => envelope::delete_fallback(status, &text),
    }
}
