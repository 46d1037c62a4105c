//! HTTP route definitions

use crate::api::models::*;
use crate::api::{gallery_handlers, handlers};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Gallery uploads carry full-size images; the extractor default of 2 MB
/// is too small.
const UPLOAD_BODY_LIMIT: usize = 25 * 1024 * 1024;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Thumbnail Gateway API",
        version = "0.1.0",
        description = "Normalizing gateway between the browser UI and the remote thumbnail-generation service.",
        license(name = "MIT"),
    ),
    paths(
        handlers::list_styles,
        handlers::generate_thumbnail,
        handlers::health_check,
        gallery_handlers::list_images,
        gallery_handlers::upload_image,
        gallery_handlers::delete_image,
    ),
    components(schemas(
        Style,
        GalleryImage,
        GalleryResponse,
        GenerationRequest,
        GenerationResult,
        DeleteImageRequest,
        HealthResponse,
    )),
    tags(
        (name = "Styles", description = "Rendering styles known to the upstream engine"),
        (name = "Gallery", description = "Stored image listing, upload, and deletion"),
        (name = "Generation", description = "Thumbnail generation"),
        (name = "Health", description = "Health and monitoring endpoints"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    let api_routes = Router::new()
        .route("/styles", get(handlers::list_styles))
        .route("/gcs/images", get(gallery_handlers::list_images))
        .route(
            "/gcs/upload",
            post(gallery_handlers::upload_image).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/gcs/delete", post(gallery_handlers::delete_image))
        .route("/generate-thumbnail", post(handlers::generate_thumbnail));

    Router::new()
        // Health check endpoint
        .route("/health", get(handlers::health_check))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // UI-facing API routes
        .nest("/api", api_routes)
        // Add shared state
        .with_state(state)
        // Browser UI may be served from another origin
        .layer(CorsLayer::permissive())
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
}
