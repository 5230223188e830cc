//! Error types for polyvalue decoding and encoding operations.

use crate::path::Path;
use thiserror::Error;

/// Errors that can occur while decoding or encoding a [`PolymorphicValue`](crate::PolymorphicValue).
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The node at `path` matched none of the integer, floating-point,
    /// sequence or mapping interpretations.
    #[error("unsupported type at {path}: found {found}")]
    UnsupportedType { path: Path, found: &'static str },

    /// The input nests containers deeper than the configured limit.
    #[error("nesting depth limit of {limit} exceeded at {path}")]
    DepthLimitExceeded { path: Path, limit: usize },

    /// The input text was not valid JSON, or the JSON writer failed on encode.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Location of the offending node, if the error is tied to one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DecodeError::UnsupportedType { path, .. }
            | DecodeError::DepthLimitExceeded { path, .. } => Some(path),
            DecodeError::Json(_) => None,
        }
    }
}

/// Convenience alias used throughout polyvalue.
pub type Result<T> = std::result::Result<T, DecodeError>;
