//! Interop with `serde_json`
//!
//! Plain JSON maps onto the JX data kinds. Symbols and function calls only
//! exist in unevaluated trees and have no JSON form.

use super::{Object, Value};
use crate::error::{JxError, Result};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map(Value::Double).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl Value {
    /// Parse JSON text into a value
    pub fn from_json_str(text: &str) -> Result<Value> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(Value::from(json))
    }

    /// Convert an evaluated value back to JSON
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(n) => serde_json::Value::from(*n),
            Value::Double(x) => serde_json::Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .ok_or_else(|| JxError::json(format!("non-finite double {x}")))?,
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Symbol(name) => {
                return Err(JxError::json(format!("unevaluated symbol `{name}`")));
            }
            Value::Array(items) => serde_json::Value::Array(
                items.iter().map(Value::to_json).collect::<Result<Vec<_>>>()?,
            ),
            Value::Object(pairs) => {
                let mut map = serde_json::Map::with_capacity(pairs.len());
                for (k, v) in pairs {
                    map.insert(k.clone(), v.to_json()?);
                }
                serde_json::Value::Object(map)
            }
            Value::FunctionCall(call) => {
                return Err(JxError::json(format!("unevaluated call `{call}`")));
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Value::from(serde_json::json!(7)), Value::Integer(7));
        assert_eq!(Value::from(serde_json::json!(1.5)), Value::Double(1.5));
        assert_eq!(Value::from(serde_json::json!(u64::MAX)), Value::Double(u64::MAX as f64));
    }

    #[test]
    fn test_from_json_str_keeps_key_order() {
        let v = Value::from_json_str(r#"{"z": 1, "a": [true, null]}"#).unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(v.to_string(), r#"{"z":1,"a":[true,null]}"#);
    }

    #[test]
    fn test_from_json_str_invalid() {
        let err = Value::from_json_str("[1,").unwrap_err();
        assert!(matches!(err, JxError::Json { .. }));
    }

    #[test]
    fn test_to_json_rejects_unevaluated_nodes() {
        assert!(Value::symbol("x").to_json().is_err());
        assert!(Value::call("str", vec![]).to_json().is_err());
        assert!(Value::Array(vec![Value::Double(f64::NAN)]).to_json().is_err());
    }

    #[test]
    fn test_to_json_evaluated_tree() {
        let v = Value::from_json_str(r#"{"a": [1, 2.5, "s"]}"#).unwrap();
        assert_eq!(v.to_json().unwrap(), serde_json::json!({"a": [1, 2.5, "s"]}));
    }
}
