//! Decode configuration.
//!
//! Options specify limits only; the [`Decoder`](crate::Decoder) enforces them.

/// Nesting limit applied when no other is configured. Matches the recursion
/// limit `serde_json` applies while parsing text.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options controlling a decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum number of nested containers. A root scalar nests zero levels,
    /// `[1]` one level, `{"a": [1]}` two.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Create options with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
