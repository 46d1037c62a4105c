//! API module - HTTP routes, handlers, and models

pub mod envelope;
pub mod gallery_handlers;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod routes;
