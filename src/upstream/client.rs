//! Outbound client for the remote thumbnail service

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::CACHE_CONTROL;
use reqwest::{multipart::Form, Client, Response};
use serde::Serialize;

/// Characters escaped the way `encodeURIComponent` escapes them: everything
/// except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment or query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Percent-encode a blob name segment by segment.
///
/// Blob names are hierarchical (`style/filename.png`); each `/`-delimited
/// segment is encoded independently and rejoined so the upstream sees the
/// same hierarchy with any unsafe characters escaped.
pub fn encode_blob_path(blob_name: &str) -> String {
    blob_name
        .split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// Client for the upstream thumbnail-generation service.
///
/// Holds the fixed base URL and a shared `reqwest::Client`. Timeout and
/// retry behavior is whatever the transport defaults to; the gateway adds
/// none of its own.
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new client for the given base URL
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Resolve a logical path to a fully qualified upstream URL.
    ///
    /// The path may or may not start with `/`; the result always joins it
    /// to the base with exactly one separator. Callers are responsible for
    /// percent-encoding any user-controlled segments first.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an upstream path, bypassing intermediary caches.
    ///
    /// Gallery contents are mutated externally via upload/delete, so every
    /// listing must re-fetch.
    pub async fn get(&self, path: &str) -> reqwest::Result<Response> {
        self.http
            .get(self.resolve(path))
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
    }

    /// POST a JSON body to an upstream path
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> reqwest::Result<Response> {
        self.http.post(self.resolve(path)).json(body).send().await
    }

    /// POST a multipart form to an upstream path
    pub async fn post_form(&self, path: &str, form: Form) -> reqwest::Result<Response> {
        self.http
            .post(self.resolve(path))
            .multipart(form)
            .send()
            .await
    }

    /// DELETE an upstream path
    pub async fn delete(&self, path: &str) -> reqwest::Result<Response> {
        self.http.delete(self.resolve(path)).send().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_with_single_slash() {
        let client = UpstreamClient::new("https://upstream.example".to_string());

        assert_eq!(client.resolve("/styles"), "https://upstream.example/styles");
        assert_eq!(client.resolve("styles"), "https://upstream.example/styles");
    }

    #[test]
    fn test_resolve_trims_trailing_base_slash() {
        let client = UpstreamClient::new("https://upstream.example/".to_string());

        assert_eq!(
            client.resolve("gcs/images"),
            "https://upstream.example/gcs/images"
        );
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("neon punk"), "neon%20punk");
        assert_eq!(encode_component("a/b"), "a%2Fb");
        assert_eq!(encode_component("file-name_1.png"), "file-name_1.png");
    }

    #[test]
    fn test_encode_blob_path_encodes_per_segment() {
        assert_eq!(encode_blob_path("a/b c"), "a/b%20c");
        assert_eq!(
            encode_blob_path("design/thumb #1.png"),
            "design/thumb%20%231.png"
        );
        assert_eq!(encode_blob_path("plain.png"), "plain.png");
    }
}
