//! Conversions between [`Value`] and [`serde_json::Value`].

use serde_json::Number;

use crate::value::{Map, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect::<Map>(),
            ),
        }
    }
}

/// `Undefined`, functions and non-finite numbers have no JSON form and become `null`.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> serde_json::Value {
        match value {
            Value::Undefined | Value::Null | Value::Function(_) => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => number(n).map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            },
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

fn number(n: f64) -> Option<Number> {
    // Whole numbers keep an integer representation so that `1.0` round-trips as `1`.
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Some(Number::from(n as i64))
    } else {
        Number::from_f64(n)
    }
}
