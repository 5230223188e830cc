//! # polyvalue
//!
//! A schema-less value model for numeric JSON that keeps **integers and floats apart**.
//!
//! Most JSON value types either collapse every number to `f64` or hide the
//! distinction behind a single number type. [`PolymorphicValue`] has four variants,
//! `Integer`, `FloatingPoint`, `Sequence` and `Mapping`, and the decoder picks the
//! most faithful one for each node: `42` becomes `Integer(42)` while `42.0` becomes
//! `FloatingPoint(42.0)`, and the two never compare equal.
//!
//! ## Quick start
//!
//! ```rust
//! use polyvalue::{decode, encode, PolymorphicValue};
//!
//! // JSON → value
//! let value = decode(r#"{"int":42,"double":3.14}"#).unwrap();
//! assert_eq!(value.get("int"), Some(&PolymorphicValue::Integer(42)));
//! assert_eq!(value.to_string(), "[double, int]: 3.14, 42");
//!
//! // value → JSON (mapping keys come out sorted)
//! assert_eq!(encode(&value).unwrap(), r#"{"double":3.14,"int":42}"#);
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `PolymorphicValue` tree, accessors, debug rendering
//! - [`decoder`] — ordered trial probing over a `ValueSource`, `Deserialize` impl
//! - [`encoder`] — `Serialize` impl and JSON text helpers
//! - [`config`] — `DecodeOptions` (nesting limit)
//! - [`path`] — JSON Pointer locations used in errors
//! - [`error`] — `DecodeError`

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod path;
pub mod types;

pub use config::DecodeOptions;
pub use decoder::{decode, decode_value, Decoder, ValueSource};
pub use encoder::{encode, encode_pretty, to_json_value};
pub use error::{DecodeError, Result};
pub use path::{Path, Segment};
pub use types::{Mapping, PolymorphicValue, ValueKind};
