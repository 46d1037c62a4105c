//! Upstream module - URL resolution and the outbound HTTP client

pub mod client;

pub use client::{encode_blob_path, encode_component, UpstreamClient};
