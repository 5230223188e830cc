//! Decoder — turns a parsed JSON tree into a [`PolymorphicValue`].
//!
//! JSON has one number syntax but this crate has two number variants, so every
//! node is decoded by ordered trial probing against a [`ValueSource`]:
//!
//! 1. integer (`42`, anything that fits `i64` without a fraction or exponent)
//! 2. floating point (`42.0`, `3.14`, `1e2`, integers beyond `i64`)
//! 3. sequence, each element decoded recursively
//! 4. mapping, each value decoded recursively
//!
//! The first interpretation that succeeds is committed. A child failure fails the
//! whole container; there are no partial results. A node that matches nothing
//! (`null`, `true`, `"text"`) is reported as [`DecodeError::UnsupportedType`]
//! together with its [`Path`].
//!
//! # Key design decisions
//!
//! - **Integer before float**: a literal without a fraction stays exact instead of
//!   being widened to `f64`. `serde_json` is built with `arbitrary_precision`, so a
//!   parsed number keeps its literal text and the integer trial parses that text:
//!   `42.0` fails it on its own while `-0` passes as `0`.
//! - **Depth guard**: containers nested deeper than [`DecodeOptions::max_depth`]
//!   are refused before recursing into them, so hostile input cannot exhaust
//!   the stack through a hand-built `serde_json::Value`.

use crate::config::DecodeOptions;
use crate::error::{DecodeError, Result};
use crate::path::Path;
use crate::types::{Mapping, PolymorphicValue};
use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, trace};

/// A single JSON node offering the four typed probes the decoder tries, in order.
///
/// Each probe returns `None` on a type mismatch; mismatches are expected and are
/// not errors.
pub trait ValueSource {
    type Elements<'a>: Iterator<Item = &'a Self>
    where
        Self: 'a;

    type Entries<'a>: Iterator<Item = (&'a str, &'a Self)>
    where
        Self: 'a;

    /// The node as an `i64`, only if it is an integer literal that fits.
    fn try_as_integer(&self) -> Option<i64>;

    /// The node as an `f64`, if it is any number literal.
    fn try_as_floating_point(&self) -> Option<f64>;

    fn try_as_sequence(&self) -> Option<Self::Elements<'_>>;

    fn try_as_mapping(&self) -> Option<Self::Entries<'_>>;

    /// Name of the node's own type, used in error messages.
    fn kind_name(&self) -> &'static str;
}

impl ValueSource for Value {
    type Elements<'a> = std::slice::Iter<'a, Value>;
    type Entries<'a> = JsonEntries<'a>;

    fn try_as_integer(&self) -> Option<i64> {
        match self {
            // Parses the literal text, so `-0` is 0 and `1.0` is rejected.
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    fn try_as_floating_point(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    fn try_as_sequence(&self) -> Option<Self::Elements<'_>> {
        match self {
            Value::Array(items) => Some(items.iter()),
            _ => None,
        }
    }

    fn try_as_mapping(&self) -> Option<Self::Entries<'_>> {
        match self {
            Value::Object(map) => Some(JsonEntries(map.iter())),
            _ => None,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Entries of a JSON object with borrowed `&str` keys.
pub struct JsonEntries<'a>(serde_json::map::Iter<'a>);

impl<'a> Iterator for JsonEntries<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Decodes JSON into [`PolymorphicValue`] trees under a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Parse JSON text, then decode the resulting tree.
    pub fn decode_str(&self, json: &str) -> Result<PolymorphicValue> {
        let value: Value = serde_json::from_str(json)?;
        self.decode_value(&value)
    }

    pub fn decode_value(&self, value: &Value) -> Result<PolymorphicValue> {
        self.decode_source(value)
    }

    /// Decode any [`ValueSource`] tree.
    pub fn decode_source<S: ValueSource>(&self, source: &S) -> Result<PolymorphicValue> {
        let mut path = Path::root();
        let decoded = self.probe(source, &mut path);
        if let Err(err) = &decoded {
            debug!(error = %err, "decode failed");
        }
        decoded
    }

    /// Try each interpretation in order. `path` is the location of `source` and
    /// is restored before returning `Ok`.
    fn probe<S: ValueSource>(&self, source: &S, path: &mut Path) -> Result<PolymorphicValue> {
        if let Some(n) = source.try_as_integer() {
            trace!(path = %path, value = n, "decoded integer");
            return Ok(PolymorphicValue::Integer(n));
        }

        if let Some(x) = source.try_as_floating_point() {
            trace!(path = %path, value = x, "decoded floating point");
            return Ok(PolymorphicValue::FloatingPoint(x));
        }

        if let Some(elements) = source.try_as_sequence() {
            self.enter_container(path)?;
            let mut items = Vec::with_capacity(elements.size_hint().0);
            for (index, element) in elements.enumerate() {
                path.push_index(index);
                items.push(self.probe(element, path)?);
                path.pop();
            }
            trace!(path = %path, len = items.len(), "decoded sequence");
            return Ok(PolymorphicValue::Sequence(items));
        }

        if let Some(entries) = source.try_as_mapping() {
            self.enter_container(path)?;
            let mut map = Mapping::new();
            for (key, child) in entries {
                path.push_key(key);
                let decoded = self.probe(child, path)?;
                path.pop();
                map.insert(key.to_string(), decoded);
            }
            trace!(path = %path, len = map.len(), "decoded mapping");
            return Ok(PolymorphicValue::Mapping(map));
        }

        Err(DecodeError::UnsupportedType {
            path: path.clone(),
            found: source.kind_name(),
        })
    }

    /// Refuse a container at `path` if its children would exceed the depth limit.
    fn enter_container(&self, path: &Path) -> Result<()> {
        if path.depth() >= self.options.max_depth {
            return Err(DecodeError::DepthLimitExceeded {
                path: path.clone(),
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }
}

/// Decode JSON text into a [`PolymorphicValue`] with default options.
///
/// Returns [`DecodeError::Json`] for malformed text and
/// [`DecodeError::UnsupportedType`] for text containing `null`, booleans or strings
/// anywhere a value is expected.
///
/// ```
/// use polyvalue::{decode, PolymorphicValue};
///
/// let value = decode(r#"{"int": 42, "double": 42.0}"#).unwrap();
/// assert_eq!(value.get("int"), Some(&PolymorphicValue::Integer(42)));
/// assert_eq!(value.get("double"), Some(&PolymorphicValue::FloatingPoint(42.0)));
/// ```
pub fn decode(json: &str) -> Result<PolymorphicValue> {
    Decoder::default().decode_str(json)
}

/// Decode an already parsed `serde_json::Value` with default options.
pub fn decode_value(value: &Value) -> Result<PolymorphicValue> {
    Decoder::default().decode_value(value)
}

impl FromStr for PolymorphicValue {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

impl TryFrom<&Value> for PolymorphicValue {
    type Error = DecodeError;

    fn try_from(value: &Value) -> Result<Self> {
        decode_value(value)
    }
}

/// Lets a `PolymorphicValue` sit inside any serde-derived type.
///
/// The input is buffered into a `serde_json::Value` first so that the ordered
/// probing sees the whole node, then decoded with default options.
impl<'de> Deserialize<'de> for PolymorphicValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_value(&value).map_err(de::Error::custom)
    }
}
