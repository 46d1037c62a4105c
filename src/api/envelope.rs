//! Error envelopes and upstream status forwarding
//!
//! Every failure surfaces to the caller as a complete, well-formed
//! response. The body shape is per-endpoint: some endpoints forward the
//! upstream verbatim, others owe their callers a fixed JSON envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// Convert an upstream status code to the server-side status type.
///
/// The outbound client and the server speak different `http` major
/// versions, so the code is carried over numerically.
pub fn forward_status(status: reqwest::StatusCode) -> StatusCode {
    StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
}

/// Body text for verbatim-forwarded upstream failures; an empty body is
/// replaced so the UI always has something to display.
pub fn upstream_error_text(text: String) -> String {
    if text.is_empty() {
        "Upstream error".to_string()
    } else {
        text
    }
}

/// `{ error }` at 500, for endpoints whose callers default independently
/// (styles, generate).
pub fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}

/// `{ success: false, error }` at 500 (delete).
pub fn internal_envelope(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": message })),
    )
        .into_response()
}

/// Gallery-listing failure: `{ success: false, images: [], error }` at 500.
///
/// The empty `images` array is part of the contract; array-consuming UI
/// code never needs a null check.
pub fn gallery_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "images": [], "error": message })),
    )
        .into_response()
}

/// Missing required field in the inbound request: 400, before any
/// upstream contact.
pub fn missing_field(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "error": message })),
    )
        .into_response()
}

/// Delete fallback for upstream bodies that are not JSON: synthesize
/// `{ success, message, error }` at the upstream's status.
pub fn delete_fallback(status: StatusCode, body: &str) -> Response {
    let ok = status.is_success();
    let error = if ok {
        Value::Null
    } else {
        Value::String(body.to_string())
    };
    (
        status,
        Json(json!({ "success": ok, "message": body, "error": error })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_status_preserves_code() {
        assert_eq!(
            forward_status(reqwest::StatusCode::BAD_GATEWAY),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(forward_status(reqwest::StatusCode::OK), StatusCode::OK);
    }

    #[test]
    fn test_upstream_error_text_fallback() {
        assert_eq!(upstream_error_text(String::new()), "Upstream error");
        assert_eq!(upstream_error_text("boom".to_string()), "boom");
    }
}
