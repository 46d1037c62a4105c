//! Application error types

use thiserror::Error;

/// Errors raised while loading configuration or starting the server.
///
/// Request-level failures never surface through this type: each endpoint
/// owns its envelope shape, so handlers build their responses through
/// [`crate::api::envelope`] instead of a blanket conversion.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
