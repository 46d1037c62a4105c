//! API request and response models

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A rendering style known to the upstream engine.
///
/// Sourced entirely from upstream; the gateway never creates, mutates, or
/// persists one.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Style {
    pub id: i64,
    pub name: String,
    pub ideogram_value: String,
}

/// One stored gallery image
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GalleryImage {
    pub url: String,

    /// Unique identifier used for deletion; may contain `/`-delimited
    /// segments and must be preserved exactly
    pub blob_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Gallery listing wrapper as the upstream returns it
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GalleryResponse {
    pub success: bool,
    pub images: Vec<GalleryImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Thumbnail generation request, forwarded to the upstream unchanged
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GenerationRequest {
    pub video_title: String,
    pub style_id: i64,
    #[serde(default)]
    pub enhance_prompt: bool,
}

/// Thumbnail generation result.
///
/// Consumers treat this as success unless `success` is explicitly `false`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GenerationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_prompt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Delete request.
///
/// The blob name travels in a POST body rather than a path segment because
/// it may itself contain `/` characters.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DeleteImageRequest {
    #[serde(default)]
    pub blob_name: Option<String>,
}

/// Query parameters for the gallery listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ImagesQuery {
    /// Restrict the listing to a single style
    pub style: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub upstream: String,
}
