//! Response envelope handling.
//!
//! Several Stratos endpoints wrap their payload in a single-key object named
//! after the resource (`{"cluster": {...}}`, `{"cartridges": [...]}`) while
//! others return it bare. Decoding goes through `serde_json::Value` so the
//! wrapper is removed structurally before the typed deserialization.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Decode `body` as `T`, first stripping a `{"<key>": ...}` wrapper if the
/// body is exactly that shape. An empty body or a `null` payload means the
/// server has no such entity and decodes as `NotFound`.
pub fn decode_enveloped<T: DeserializeOwned>(body: &str, key: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::NotFound);
    }
    let value: Value =
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    match unwrap_envelope(value, key) {
        Value::Null => Err(ApiError::NotFound),
        payload => {
            serde_json::from_value(payload).map_err(|e| ApiError::Deserialization(e.to_string()))
        }
    }
}

/// Decode a list response. Besides the enveloped and bare shapes, an empty
/// body or `null` counts as an empty list.
pub fn decode_enveloped_list<T: DeserializeOwned>(
    body: &str,
    key: &str,
) -> Result<Vec<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value =
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    match unwrap_envelope(value, key) {
        Value::Null => Ok(Vec::new()),
        // A single-element list is sometimes serialized as the element itself.
        single @ Value::Object(_) => serde_json::from_value(single)
            .map(|item| vec![item])
            .map_err(|e| ApiError::Deserialization(e.to_string())),
        other => {
            serde_json::from_value(other).map_err(|e| ApiError::Deserialization(e.to_string()))
        }
    }
}

/// Strip a single-key `{key: inner}` wrapper, returning `inner`. Anything
/// else is returned untouched.
pub fn unwrap_envelope(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut map) if map.len() == 1 && map.contains_key(key) => {
            map.remove(key).unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn wrapped_object_is_unwrapped() {
        let item: Item = decode_enveloped(r#"{"cluster":{"id":"c1"}}"#, "cluster").unwrap();
        assert_eq!(item, Item { id: "c1".into() });
    }

    #[test]
    fn bare_object_passes_through() {
        let item: Item = decode_enveloped(r#"{"id":"c1"}"#, "cluster").unwrap();
        assert_eq!(item.id, "c1");
    }

    #[test]
    fn other_keys_are_not_treated_as_envelopes() {
        let value = unwrap_envelope(json!({"id": "x"}), "cluster");
        assert_eq!(value, json!({"id": "x"}));
        let value = unwrap_envelope(json!({"cluster": 1, "extra": 2}), "cluster");
        assert_eq!(value, json!({"cluster": 1, "extra": 2}));
    }

    #[test]
    fn list_accepts_wrapped_bare_single_and_empty() {
        let wrapped: Vec<Item> =
            decode_enveloped_list(r#"{"items":[{"id":"a"},{"id":"b"}]}"#, "items").unwrap();
        assert_eq!(wrapped.len(), 2);

        let bare: Vec<Item> = decode_enveloped_list(r#"[{"id":"a"}]"#, "items").unwrap();
        assert_eq!(bare[0].id, "a");

        let single: Vec<Item> = decode_enveloped_list(r#"{"items":{"id":"a"}}"#, "items").unwrap();
        assert_eq!(single, vec![Item { id: "a".into() }]);

        let empty: Vec<Item> = decode_enveloped_list("", "items").unwrap();
        assert!(empty.is_empty());
        let null: Vec<Item> = decode_enveloped_list(r#"{"items":null}"#, "items").unwrap();
        assert!(null.is_empty());
    }

    #[test]
    fn missing_entity_is_not_found() {
        for body in ["", "  ", "null", r#"{"cluster":null}"#] {
            let err = decode_enveloped::<Item>(body, "cluster").unwrap_err();
            assert!(matches!(err, ApiError::NotFound), "{body:?}: {err:?}");
        }
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let err = decode_enveloped::<Item>("{not json", "cluster").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
