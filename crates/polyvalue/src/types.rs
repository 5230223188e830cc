//! The polymorphic value tree.
//!
//! [`PolymorphicValue`] mirrors the numeric and container subset of JSON but keeps
//! integers and floats apart: `42` and `42.0` are different values, and stay
//! different through decode, encode and comparison.

use std::collections::BTreeMap;
use std::fmt;

/// Key-value pairs of a [`PolymorphicValue::Mapping`].
///
/// Ordered by key so that printing is deterministic and equality ignores the
/// order keys appeared in the input.
pub type Mapping = BTreeMap<String, PolymorphicValue>;

/// A schema-less JSON number or container.
///
/// Equality is structural and never coerces between variants:
///
/// ```
/// use polyvalue::PolymorphicValue;
///
/// assert_ne!(PolymorphicValue::Integer(42), PolymorphicValue::FloatingPoint(42.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PolymorphicValue {
    Integer(i64),
    FloatingPoint(f64),
    Sequence(Vec<PolymorphicValue>),
    Mapping(Mapping),
}

/// Variant tag of a [`PolymorphicValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    FloatingPoint,
    Sequence,
    Mapping,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::FloatingPoint => "floating-point",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PolymorphicValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            PolymorphicValue::Integer(_) => ValueKind::Integer,
            PolymorphicValue::FloatingPoint(_) => ValueKind::FloatingPoint,
            PolymorphicValue::Sequence(_) => ValueKind::Sequence,
            PolymorphicValue::Mapping(_) => ValueKind::Mapping,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, PolymorphicValue::Integer(_))
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(self, PolymorphicValue::FloatingPoint(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, PolymorphicValue::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, PolymorphicValue::Mapping(_))
    }

    /// The integer payload. Floats are not converted, even whole ones.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PolymorphicValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The floating-point payload. Integers are not widened.
    pub fn as_floating_point(&self) -> Option<f64> {
        match self {
            PolymorphicValue::FloatingPoint(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[PolymorphicValue]> {
        match self {
            PolymorphicValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            PolymorphicValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up `key` if this is a mapping.
    pub fn get(&self, key: &str) -> Option<&PolymorphicValue> {
        self.as_mapping().and_then(|map| map.get(key))
    }
}

impl From<i64> for PolymorphicValue {
    fn from(value: i64) -> Self {
        PolymorphicValue::Integer(value)
    }
}

impl From<i32> for PolymorphicValue {
    fn from(value: i32) -> Self {
        PolymorphicValue::Integer(i64::from(value))
    }
}

impl From<f64> for PolymorphicValue {
    fn from(value: f64) -> Self {
        PolymorphicValue::FloatingPoint(value)
    }
}

impl From<Vec<PolymorphicValue>> for PolymorphicValue {
    fn from(items: Vec<PolymorphicValue>) -> Self {
        PolymorphicValue::Sequence(items)
    }
}

impl From<Mapping> for PolymorphicValue {
    fn from(map: Mapping) -> Self {
        PolymorphicValue::Mapping(map)
    }
}

impl FromIterator<PolymorphicValue> for PolymorphicValue {
    fn from_iter<I: IntoIterator<Item = PolymorphicValue>>(iter: I) -> Self {
        PolymorphicValue::Sequence(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, PolymorphicValue)> for PolymorphicValue {
    fn from_iter<I: IntoIterator<Item = (K, PolymorphicValue)>>(iter: I) -> Self {
        PolymorphicValue::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Debug-oriented rendering, not JSON.
///
/// - Integers print as digits, floats always with a fractional part or exponent
///   (`42.0`, `3.14`, `1e100`).
/// - Sequences print as `[a, b, c]`.
/// - Mappings print their keys, then their values: `[k1, k2]: v1, v2`.
///
/// ```
/// use polyvalue::PolymorphicValue;
///
/// let value: PolymorphicValue = [
///     ("int", PolymorphicValue::Integer(42)),
///     ("double", PolymorphicValue::FloatingPoint(3.14)),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(value.to_string(), "[double, int]: 3.14, 42");
/// ```
impl fmt::Display for PolymorphicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolymorphicValue::Integer(n) => write!(f, "{n}"),
            // `{:?}` keeps the trailing `.0` on whole floats.
            PolymorphicValue::FloatingPoint(x) => write!(f, "{x:?}"),
            PolymorphicValue::Sequence(items) => {
                f.write_str("[")?;
                write_joined(f, items.iter())?;
                f.write_str("]")
            }
            PolymorphicValue::Mapping(map) => {
                f.write_str("[")?;
                write_joined(f, map.keys())?;
                f.write_str("]: ")?;
                write_joined(f, map.values())
            }
        }
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
