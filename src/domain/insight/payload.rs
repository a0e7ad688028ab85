//! Data payload handed to insight models

use serde_json::{Map, Value};

/// Processed data handed to a model for prediction: a mapping from string
/// keys to arbitrary JSON values.
///
/// Dispatch passes payloads by shared reference, so a model observes exactly
/// what the caller supplied.
pub type DataPayload = Map<String, Value>;

/// Build a payload from a JSON value, returning `None` unless it is an object.
pub fn payload_from_json(value: Value) -> Option<DataPayload> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_from_json_object() {
        let payload = payload_from_json(json!({"x": 1, "label": "a"})).unwrap();
        assert_eq!(payload.get("x"), Some(&json!(1)));
        assert_eq!(payload.get("label"), Some(&json!("a")));
    }

    #[test]
    fn test_payload_from_json_rejects_non_objects() {
        assert!(payload_from_json(json!([1, 2, 3])).is_none());
        assert!(payload_from_json(json!("text")).is_none());
        assert!(payload_from_json(json!(null)).is_none());
    }
}
