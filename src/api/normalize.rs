//! Normalization of upstream styles payloads
//!
//! The upstream's response shape for `GET /styles` is not contractually
//! fixed and has varied in practice: sometimes a bare array, sometimes an
//! object wrapping the array under a conventional key.

use serde::Deserialize;
use serde_json::Value;

/// The closed set of shapes the upstream returns for the styles listing.
///
/// Variant order is the tie-break: a payload carrying several wrapper keys
/// resolves to the first matching variant (`styles` wins, then `data`,
/// then `result`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StylesPayload {
    Bare(Vec<Value>),
    WrappedStyles { styles: Vec<Value> },
    WrappedData { data: Vec<Value> },
    WrappedResult { result: Vec<Value> },
    Other(Value),
}

impl StylesPayload {
    /// Resolve to a bare styles array, `[]` when no known shape matched
    pub fn into_styles(self) -> Vec<Value> {
        match self {
            StylesPayload::Bare(styles)
            | StylesPayload::WrappedStyles { styles }
            | StylesPayload::WrappedData { data: styles }
            | StylesPayload::WrappedResult { result: styles } => styles,
            StylesPayload::Other(_) => Vec::new(),
        }
    }
}

/// Normalize a decoded upstream payload into a bare styles array
pub fn normalize_styles(value: Value) -> Vec<Value> {
    serde_json::from_value::<StylesPayload>(value)
        .map(StylesPayload::into_styles)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array_returned_unchanged() {
        let input = json!([{"id": 1, "name": "Anime", "ideogram_value": "anime"}]);
        let expected = input.as_array().unwrap().clone();
        assert_eq!(normalize_styles(input), expected);
    }

    #[test]
    fn test_unwraps_each_known_key() {
        for key in ["styles", "data", "result"] {
            let input = json!({ key: [{"id": 2}] });
            assert_eq!(normalize_styles(input), vec![json!({"id": 2})]);
        }
    }

    #[test]
    fn test_wrapper_key_priority() {
        let input = json!({
            "result": [{"id": 3}],
            "data": [{"id": 2}],
            "styles": [{"id": 1}],
        });
        assert_eq!(normalize_styles(input), vec![json!({"id": 1})]);

        let input = json!({
            "result": [{"id": 3}],
            "data": [{"id": 2}],
        });
        assert_eq!(normalize_styles(input), vec![json!({"id": 2})]);
    }

    #[test]
    fn test_non_array_wrapper_value_falls_through() {
        let input = json!({ "styles": "not-an-array", "data": [{"id": 2}] });
        assert_eq!(normalize_styles(input), vec![json!({"id": 2})]);
    }

    #[test]
    fn test_unknown_shapes_yield_empty() {
        assert!(normalize_styles(json!({})).is_empty());
        assert!(normalize_styles(json!(null)).is_empty());
        assert!(normalize_styles(json!("styles")).is_empty());
        assert!(normalize_styles(json!({"items": [1, 2]})).is_empty());
    }
}
