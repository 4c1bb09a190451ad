//! JSON boundary
//!
//! Resolves `serde_json` documents into [`Value`] once, at the point where
//! external data enters the engine.

use num_bigint::BigInt;
use serde_json::Value as JsonValue;
use std::str::FromStr;

use crate::{Value, ValueMap};

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Boolean(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Long(i)
                } else if let Some(u) = n.as_u64() {
                    Value::BigInt(BigInt::from(u))
                } else {
                    // Arbitrary precision builds may hand back integers wider than u64
                    let text = n.to_string();
                    match BigInt::from_str(&text) {
                        Ok(big) => Value::BigInt(big),
                        Err(_) => n.as_f64().map_or(Value::Null, Value::Double),
                    }
                }
            }
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(object) => Value::Map(
                object
                    .into_iter()
                    .map(|(k, v)| (Value::String(k), Value::from(v)))
                    .collect::<ValueMap>(),
            ),
        }
    }
}
