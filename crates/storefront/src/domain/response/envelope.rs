//! Decoding of the backend's inconsistent response envelopes.
//!
//! List endpoints answer either with a bare array or with an object holding
//! the array under a resource-specific key. Single-record endpoints likewise
//! answer with the record itself or wrap it (`{"user": {...}}`).

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::errors::ClientError;

/// Bare arrays are taken as-is, `{key: [...]}` is unwrapped, and every other
/// shape yields an empty list.
pub fn extract_list<T>(value: Value, key: &str) -> Result<Vec<T>, ClientError>
where
    T: DeserializeOwned,
{
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| ClientError::Decode(format!("invalid '{key}' entry: {e}")))
}

/// Unwraps `{key: {...}}` when present, otherwise decodes the value itself.
pub fn extract_record<T>(value: Value, key: &str) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    let inner = match value {
        Value::Object(mut map) if matches!(map.get(key), Some(Value::Object(_))) => {
            map.remove(key).unwrap_or(Value::Null)
        }
        other => other,
    };

    serde_json::from_value(inner).map_err(|e| ClientError::Decode(format!("invalid '{key}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn bare_array() {
        let items: Vec<Item> = extract_list(json!([{"id": 1}, {"id": 2}]), "products").unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn wrapped_array() {
        let items: Vec<Item> =
            extract_list(json!({"products": [{"id": 3}], "total": 1}), "products").unwrap();
        assert_eq!(items, vec![Item { id: 3 }]);
    }

    #[test]
    fn other_shapes_are_empty() {
        for value in [
            json!({"items": [{"id": 1}]}),
            json!({"products": {"id": 1}}),
            json!(null),
            json!("nope"),
            json!(42),
        ] {
            let items: Vec<Item> = extract_list(value, "products").unwrap();
            assert!(items.is_empty());
        }
    }

    #[test]
    fn malformed_entry_is_a_decode_error() {
        let err = extract_list::<Item>(json!([{"id": "x"}]), "products").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn record_wrapped_or_bare() {
        let wrapped: Item = extract_record(json!({"user": {"id": 9}}), "user").unwrap();
        let bare: Item = extract_record(json!({"id": 9}), "user").unwrap();
        assert_eq!(wrapped, bare);
    }
}
