//! Defines [`GeoFormatError`], representing all errors returned by this crate.

use std::fmt;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoFormatError {
    /// A geometry was constructed in violation of the data model, e.g. too few components or a
    /// component of the wrong type for a homogeneous collection.
    #[error("Invalid geometry: {0}")]
    Validation(String),

    /// Malformed text or binary input.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The detector found no match, or no adapter is registered under the requested name.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// An operation that only the external geometry engine can perform was requested while no
    /// engine is attached.
    #[error("Operation `{0}` requires a geometry engine")]
    EngineUnavailable(&'static str),

    /// The external geometry engine reported a failure.
    #[error("Geometry engine error: {0}")]
    Engine(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

impl GeoFormatError {
    /// Whether the caller's input was malformed.
    pub fn is_parse(&self) -> bool {
        matches!(self, GeoFormatError::Parse(_))
    }

    /// Whether a geometry violating the data model was about to be built.
    pub fn is_validation(&self) -> bool {
        matches!(self, GeoFormatError::Validation(_))
    }

    pub fn is_unknown_format(&self) -> bool {
        matches!(self, GeoFormatError::UnknownFormat(_))
    }

    /// The [ParseError] carried by this error, if any.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            GeoFormatError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Malformed input, with the byte offset at which it was detected when known.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: Option<usize>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(offset) = self.offset {
            write!(f, " at offset {offset}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self { kind, offset: None }
    }

    pub fn at(kind: ParseErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset: Some(offset),
        }
    }
}

/// The reason a [ParseError] was raised.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("empty input")]
    EmptyInput,

    #[error("unknown geometry type keyword `{0}`")]
    UnknownKeyword(String),

    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("invalid SRID prefix `{0}`")]
    InvalidSrid(String),

    #[error("unsupported byte order {0}, only little endian (1) is supported")]
    UnsupportedByteOrder(u8),

    #[error("truncated buffer")]
    Truncated,

    #[error("unknown geometry type code {0}")]
    UnknownTypeCode(u32),

    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("nesting depth exceeds the limit of {0}")]
    DepthExceeded(usize),

    #[error("unexpected trailing input")]
    TrailingInput,

    #[error("input is not valid UTF-8")]
    InvalidUtf8,

    #[error("invalid GeoJSON: {0}")]
    Json(String),
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        ParseError::new(kind)
    }
}

impl From<ParseErrorKind> for GeoFormatError {
    fn from(kind: ParseErrorKind) -> Self {
        GeoFormatError::Parse(kind.into())
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoFormatError>;
