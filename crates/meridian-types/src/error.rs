//! Error types for meridian.

use thiserror::Error;

/// Result type alias for meridian operations.
pub type Result<T> = std::result::Result<T, MeridianError>;

/// Errors that can occur while assembling market series.
#[derive(Error, Debug)]
pub enum MeridianError {
    /// Index code is not registered in the catalog.
    #[error("Unknown index: {0}")]
    UnknownIndex(String),

    /// A quote provider failed.
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// The index catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by a quote provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Network failure, timeout, or non-success HTTP status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The payload reported an error or failed shape validation.
    #[error("Data error: {0}")]
    Data(String),
}

impl QuoteError {
    /// Returns true if this is a transport-level failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true if this is a payload-level failure.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }
}

/// Errors raised while loading an index catalog table.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two entries share the same code.
    #[error("Duplicate index code: {0}")]
    DuplicateCode(String),

    /// The table is not valid JSON or has the wrong shape.
    #[error("Invalid catalog table: {0}")]
    Invalid(#[from] serde_json::Error),

    /// The table file could not be read.
    #[error("Failed to read catalog table: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned when parsing an unrecognised enum keyword.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} '{value}', expected one of: {expected}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}
