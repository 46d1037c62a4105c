//! Main entry point for the Thumbnail Gateway

use std::sync::Arc;
use thumbnail_gateway::{api, config::Settings, AppState};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));

    let fmt_layer = if settings.logging.format == "json" {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    info!("Starting Thumbnail Gateway");
    info!(
        upstream = %settings.upstream.base_url,
        "Proxying to upstream thumbnail service"
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Create application state
    let state = Arc::new(AppState::new(settings));

    // Build the router
    let app = api::routes::create_router(state);

    info!("Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
