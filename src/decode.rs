//! Response decoding
//!
//! Parses response bodies as JSON and normalizes the top-level shape into a
//! keyed object: objects pass through, arrays are wrapped under `data`, and
//! scalars are wrapped under `value`. The API returns an object for most
//! endpoints, but the normalization keeps the "any shape" contract type-safe.

use crate::error::Result;
use crate::types::{JsonObject, JsonValue};

/// Key used when wrapping a top-level array
const ARRAY_KEY: &str = "data";

/// Key used when wrapping a top-level scalar
const SCALAR_KEY: &str = "value";

/// Parse a response body and normalize its top-level shape.
///
/// Fails with [`crate::Error::JsonDecode`] when the body is not valid JSON.
pub fn decode_body(body: &str) -> Result<JsonObject> {
    let value: JsonValue = serde_json::from_str(body)?;
    Ok(normalize(value))
}

/// Normalize a JSON value into a keyed object
pub fn normalize(value: JsonValue) -> JsonObject {
    match value {
        JsonValue::Object(map) => map,
        JsonValue::Array(_) => {
            let mut map = JsonObject::new();
            map.insert(ARRAY_KEY.to_string(), value);
            map
        }
        scalar => {
            let mut map = JsonObject::new();
            map.insert(SCALAR_KEY.to_string(), scalar);
            map
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_object_passes_through() {
        let decoded = decode_body(r#"{"success": true, "vin": "WBA123"}"#).unwrap();
        assert_eq!(decoded["success"], json!(true));
        assert_eq!(decoded["vin"], json!("WBA123"));
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn test_array_wraps_under_data() {
        let decoded = decode_body("[1, 2, 3]").unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded["data"], json!([1, 2, 3]));
    }

    #[test]
    fn test_scalar_wraps_under_value() {
        let decoded = decode_body("\"ok\"").unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded["value"], json!("ok"));

        let decoded = decode_body("42").unwrap();
        assert_eq!(decoded["value"], json!(42));

        let decoded = decode_body("null").unwrap();
        assert_eq!(decoded["value"], JsonValue::Null);
    }

    #[test]
    fn test_malformed_json_fails() {
        let err = decode_body("{not json").unwrap_err();
        assert!(matches!(err, Error::JsonDecode(_)));
    }

    #[test]
    fn test_empty_body_fails() {
        assert!(matches!(
            decode_body("").unwrap_err(),
            Error::JsonDecode(_)
        ));
    }
}
