//! The contract every format codec implements.

use std::fmt::Debug;

use crate::error::{ParseErrorKind, Result};
use crate::geometry::Geometry;

/// Per-call options passed through to an adapter.
///
/// Adapters ignore options that do not apply to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Read or write binary formats as a hex string instead of raw bytes.
    pub hex: bool,
}

impl FormatOptions {
    pub fn hex() -> Self {
        Self { hex: true }
    }
}

/// The serialized form of a geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutput {
    Text(String),
    Binary(Vec<u8>),
}

impl FormatOutput {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FormatOutput::Text(text) => text.as_bytes(),
            FormatOutput::Binary(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            FormatOutput::Text(text) => text.into_bytes(),
            FormatOutput::Binary(bytes) => bytes,
        }
    }

    /// The text, if this output is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormatOutput::Text(text) => Some(text),
            FormatOutput::Binary(_) => None,
        }
    }
}

impl From<String> for FormatOutput {
    fn from(value: String) -> Self {
        FormatOutput::Text(value)
    }
}

impl From<Vec<u8>> for FormatOutput {
    fn from(value: Vec<u8>) -> Self {
        FormatOutput::Binary(value)
    }
}

/// A format codec.
///
/// Adapters are stateless: `read` and `write` depend only on their arguments and the adapter's
/// own construction-time configuration.
pub trait GeoAdapter: Send + Sync + Debug {
    /// Decode a geometry, failing with a parse error on malformed input.
    fn read(&self, input: &[u8], options: &FormatOptions) -> Result<Geometry>;

    /// Encode a geometry. Every valid [Geometry] can be written.
    fn write(&self, geometry: &Geometry, options: &FormatOptions) -> Result<FormatOutput>;
}

/// Interpret adapter input as UTF-8 text.
pub(crate) fn input_as_str(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input).map_err(|_| ParseErrorKind::InvalidUtf8.into())
}
