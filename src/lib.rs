//! Thumbnail Gateway
//!
//! A Rust gateway that sits between a browser UI and a remote
//! thumbnail-generation service, normalizing the upstream's inconsistent
//! response shapes into the fixed contract the UI consumes.

pub mod api;
pub mod config;
pub mod error;
pub mod upstream;

pub use error::{AppError, Result};

use upstream::client::UpstreamClient;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: config::Settings,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(settings: config::Settings) -> Self {
        let upstream = UpstreamClient::new(settings.upstream.base_url.clone());
        Self { settings, upstream }
    }
}
