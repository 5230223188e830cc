//! Encoder — writes a [`PolymorphicValue`] back out as JSON.
//!
//! The [`Serialize`] impl is the single outbound seam: each variant maps to one
//! serializer call (`serialize_i64`, `serialize_f64`, a sequence or a map), so any
//! serde format can carry a `PolymorphicValue`. The JSON helpers below go through
//! `serde_json`.
//!
//! Floats keep their float form on the way out: `FloatingPoint(42.0)` encodes as
//! `42.0`, never `42`, which is what lets `decode(encode(v)) == v` hold. Non-finite
//! floats have no JSON spelling and are written as `null`, following `serde_json`.
//!
//! # Example
//! ```
//! use polyvalue::{encode, PolymorphicValue};
//!
//! let value = PolymorphicValue::Sequence(vec![
//!     PolymorphicValue::Integer(42),
//!     PolymorphicValue::FloatingPoint(42.0),
//! ]);
//! assert_eq!(encode(&value).unwrap(), "[42,42.0]");
//! ```

use crate::error::Result;
use crate::types::PolymorphicValue;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Number, Value};

impl Serialize for PolymorphicValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PolymorphicValue::Integer(n) => serializer.serialize_i64(*n),
            PolymorphicValue::FloatingPoint(x) => serializer.serialize_f64(*x),
            PolymorphicValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            PolymorphicValue::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Encode as compact JSON text.
pub fn encode(value: &PolymorphicValue) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode as indented JSON text.
pub fn encode_pretty(value: &PolymorphicValue) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Build the equivalent `serde_json::Value` tree.
///
/// Infallible: every variant has a JSON counterpart, with non-finite floats
/// becoming `Value::Null`.
pub fn to_json_value(value: &PolymorphicValue) -> Value {
    match value {
        PolymorphicValue::Integer(n) => Value::Number(Number::from(*n)),
        PolymorphicValue::FloatingPoint(x) => {
            Number::from_f64(*x).map_or(Value::Null, Value::Number)
        }
        PolymorphicValue::Sequence(items) => {
            Value::Array(items.iter().map(to_json_value).collect())
        }
        PolymorphicValue::Mapping(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, child) in entries {
                map.insert(key.clone(), to_json_value(child));
            }
            Value::Object(map)
        }
    }
}

impl From<&PolymorphicValue> for Value {
    fn from(value: &PolymorphicValue) -> Self {
        to_json_value(value)
    }
}

impl From<PolymorphicValue> for Value {
    fn from(value: PolymorphicValue) -> Self {
        to_json_value(&value)
    }
}
