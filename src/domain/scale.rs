use serde::{Serialize, Serializer};

use super::{AppError, expr};

/// A decoded numeric column together with the exact text it came from.
///
/// Encoding writes `text` back out, so a value read as `1.0` is never rewritten as `1`.
/// Both halves are set together by the constructors and cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    value: f64,
    text: String,
}

impl Number {
    /// A value with no source text, encoded as an empty column.
    pub fn default_of(value: f64) -> Self {
        Self { value, text: String::new() }
    }

    /// A value together with the text that produced it.
    pub fn with_text(value: f64, text: impl Into<String>) -> Self {
        Self { value, text: text.into().trim().to_string() }
    }

    /// Evaluate an expression column; an empty column yields `default` with empty text.
    pub fn parse_expr_or(text: &str, default: f64) -> Result<Self, AppError> {
        match text.trim() {
            "" => Ok(Self::default_of(default)),
            s => Ok(Self::with_text(expr::evaluate(s)?, s)),
        }
    }

    /// Parse a plain float column.
    pub fn parse_float(text: &str) -> Result<Self, AppError> {
        let s = text.trim();
        let value = s
            .parse::<f64>()
            .map_err(|source| AppError::InvalidNumber { value: s.to_string(), source })?;
        Ok(Self::with_text(value, s))
    }

    /// Replace the value while keeping the source text.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        Self { value: f(self.value), text: self.text }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

/// Linear transform `factor * x + bias`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    pub factor: Number,
    pub bias: Number,
}

impl Scale {
    pub const DEFAULT_FACTOR: f64 = 1.0;
    pub const DEFAULT_BIAS: f64 = 0.0;

    /// Decode the factor and bias columns, substituting defaults for empty text.
    pub fn decode(factor: &str, bias: &str) -> Result<Self, AppError> {
        Ok(Self {
            factor: Number::parse_expr_or(factor, Self::DEFAULT_FACTOR)?,
            bias: Number::parse_expr_or(bias, Self::DEFAULT_BIAS)?,
        })
    }

    pub fn apply(&self, x: f64) -> f64 {
        self.factor.value() * x + self.bias.value()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            factor: Number::default_of(Self::DEFAULT_FACTOR),
            bias: Number::default_of(Self::DEFAULT_BIAS),
        }
    }
}
