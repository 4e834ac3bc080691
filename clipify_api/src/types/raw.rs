//! Field access over JSON kept exactly as the server sent it.
//!
//! Every response type wraps a [`Value`] and reads its fields on demand. A
//! field that is absent or has an unexpected JSON type reads as `None`;
//! it never makes the response fail to decode, and re-encoding yields the
//! original JSON.

use serde_json::{Number, Value};

/// Declares a pass-through JSON wrapper with raw-value access.
macro_rules! json_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(serde_json::Value);

        impl $name {
            /// The JSON exactly as received.
            pub fn as_value(&self) -> &serde_json::Value {
                &self.0
            }

            pub fn into_value(self) -> serde_json::Value {
                self.0
            }

            /// Any field by its wire name, typed or not.
            pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
                self.0.get(key)
            }
        }

        impl From<serde_json::Value> for $name {
            fn from(value: serde_json::Value) -> Self {
                Self(value)
            }
        }
    };
}

pub(crate) use json_object;

pub(crate) fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.as_str()
}

pub(crate) fn bool_field(value: &Value, key: &str) -> Option<bool> {
    value.get(key)?.as_bool()
}

pub(crate) fn number_field<'a>(value: &'a Value, key: &str) -> Option<&'a Number> {
    match value.get(key)? {
        Value::Number(n) => Some(n),
        _ => None,
    }
}

pub(crate) fn object_field<T: From<Value>>(value: &Value, key: &str) -> Option<T> {
    value
        .get(key)
        .filter(|v| v.is_object())
        .cloned()
        .map(T::from)
}

/// Elements of an array field. Elements are wrapped whatever their type.
pub(crate) fn list_field<T: From<Value>>(value: &Value, key: &str) -> Option<Vec<T>> {
    let items = value.get(key)?.as_array()?;
    Some(items.iter().cloned().map(T::from).collect())
}

/// The `error` field of a JSON body, when it holds something usable.
/// Empty strings, zero, `false` and `null` count as absent; other
/// non-string values are rendered as JSON text.
pub(crate) fn error_text(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        v @ (Value::Array(_) | Value::Object(_)) => Some(v.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mismatched_types_read_as_none() {
        let v = json!({"name": 5, "flag": "yes", "count": "3", "nested": [1]});
        assert_eq!(str_field(&v, "name"), None);
        assert_eq!(bool_field(&v, "flag"), None);
        assert_eq!(number_field(&v, "count"), None);
        assert_eq!(object_field::<Value>(&v, "nested"), None);
        assert_eq!(list_field::<Value>(&v, "name"), None);
        assert_eq!(str_field(&v, "missing"), None);
    }

    #[test]
    fn fields_on_non_object_read_as_none() {
        assert_eq!(str_field(&json!([1, 2]), "error"), None);
        assert_eq!(error_text(&json!("error")), None);
    }

    #[test]
    fn error_text_ignores_falsy_values() {
        assert_eq!(error_text(&json!({"error": "boom"})), Some("boom".to_string()));
        assert_eq!(error_text(&json!({"error": 42})), Some("42".to_string()));
        assert_eq!(
            error_text(&json!({"error": {"code": "E1"}})),
            Some(r#"{"code":"E1"}"#.to_string())
        );
        assert_eq!(error_text(&json!({"error": ""})), None);
        assert_eq!(error_text(&json!({"error": null})), None);
        assert_eq!(error_text(&json!({"error": false})), None);
        assert_eq!(error_text(&json!({"error": 0})), None);
        assert_eq!(error_text(&json!({"message": "boom"})), None);
    }
}
