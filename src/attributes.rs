//! Keyed lookups over JSON objects used as loose parameter bags.

use serde_json::{Map, Value};

/// Value stored under `key`, or `default` when the key is absent or `None`.
///
/// ```
/// use bandolier::attributes::get_attribute;
/// use serde_json::{json, Value};
///
/// let data = json!({"bar": "foo"});
/// let data = data.as_object().unwrap();
/// assert_eq!(get_attribute(data, Some("bar"), Value::Null), json!("foo"));
/// assert_eq!(get_attribute(data, Some("bazz"), json!("bin")), json!("bin"));
/// ```
pub fn get_attribute(data: &Map<String, Value>, key: Option<&str>, default: Value) -> Value {
    key.and_then(|k| data.get(k))
        .cloned()
        .unwrap_or(default)
}

/// Overlay `overrides` on top of `defaults`.
///
/// Every key from `defaults` is present in the result; keys that only
/// appear in `overrides` are kept as well.
pub fn default_attributes(
    defaults: Map<String, Value>,
    overrides: Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = defaults;
    merged.extend(overrides);
    merged
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_get_attribute_finds_key() {
        let data = object(json!({"bar": "foo"}));
        assert_eq!(get_attribute(&data, Some("bar"), Value::Null), json!("foo"));
    }

    #[test]
    fn test_get_attribute_missing_key_without_default_is_null() {
        let data = object(json!({"bar": "foo"}));
        assert_eq!(get_attribute(&data, Some("bazz"), Value::Null), Value::Null);
    }

    #[test]
    fn test_get_attribute_returns_default() {
        let data = object(json!({"bar": "foo"}));
        assert_eq!(get_attribute(&data, Some("bazz"), json!("bin")), json!("bin"));
        assert_eq!(get_attribute(&data, None, json!("bin")), json!("bin"));
    }

    #[test]
    fn test_default_attributes_overlay() {
        let defaults = object(json!({"request": "GET", "requestParams": {}}));
        let overrides = object(json!({"request": "POST", "extra": 1}));
        let merged = default_attributes(defaults, overrides);

        assert_eq!(merged.get("request"), Some(&json!("POST")));
        assert_eq!(merged.get("requestParams"), Some(&json!({})));
        assert_eq!(merged.get("extra"), Some(&json!(1)));
    }
}
