use std::io;

use thiserror::Error;

use super::expr::ExprError;

/// Library-wide error type for metadata list operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The tabular text source could not be read or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row does not have the column count of its record kind.
    #[error("incorrect number of installed {kind} fields: expected {expected}, found {found}")]
    MalformedRow { kind: &'static str, expected: usize, found: usize },

    /// A numeric expression column could not be evaluated.
    #[error(transparent)]
    Expr(#[from] ExprError),

    /// A plain floating point column could not be parsed.
    #[error("invalid number '{value}': {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A timestamp column does not match the configured format.
    #[error("invalid timestamp '{value}' for format '{format}': {source}")]
    InvalidTimestamp {
        value: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A boolean column holds an unrecognised token.
    #[error("invalid boolean '{0}'")]
    InvalidBool(String),

    /// A validity interval ends before it starts.
    #[error("invalid {kind} span: end {end} is before start {start}")]
    InvalidSpan { kind: &'static str, start: String, end: String },

    /// Two records of a lookup kind share a natural key.
    #[error("duplicate {kind} entry for key '{key}'")]
    DuplicateKey { kind: &'static str, key: String },

    /// Generator schema is inconsistent.
    #[error("Invalid schema: {0}")]
    Schema(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Template registration or rendering failed.
    #[error("Template error: {0}")]
    Template(String),

    /// A file differs from its canonical encoding.
    #[error("{0} is not in canonical form")]
    NotCanonical(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Csv(_)
            | AppError::MalformedRow { .. }
            | AppError::Expr(_)
            | AppError::InvalidNumber { .. }
            | AppError::InvalidTimestamp { .. }
            | AppError::InvalidBool(_)
            | AppError::InvalidSpan { .. }
            | AppError::DuplicateKey { .. }
            | AppError::NotCanonical(_)
            | AppError::Json(_) => io::ErrorKind::InvalidData,
            AppError::Schema(_)
            | AppError::Configuration(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::Template(_) => io::ErrorKind::Other,
        }
    }
}
