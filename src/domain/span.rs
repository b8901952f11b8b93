use std::fmt;

use chrono::format::{Item, ParseErrorKind, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AppError;

/// Timestamp layout used by every metadata table.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// 2001-02-03T04:05:06Z, used to check that a pattern keeps every field down to the second.
const SAMPLE_TIMESTAMP: i64 = 981_173_106;

/// The textual timestamp layout shared by the columns of a table.
///
/// Held by whoever drives a load or a write and handed to the codec, so alternate
/// layouts never need process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeFormat(String);

impl TimeFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reject patterns that cannot carry a full timestamp to the second.
    ///
    /// A pattern must format and parse back to the same instant, so date-only or minute-resolution
    /// layouts are refused here rather than failing on every row later.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.0.trim().is_empty() {
            return Err(AppError::config_error("datetime_format must not be empty"));
        }
        if StrftimeItems::new(&self.0).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::config_error(format!(
                "datetime_format '{}' is not a valid strftime pattern",
                self.0
            )));
        }

        let sample = DateTime::from_timestamp(SAMPLE_TIMESTAMP, 0)
            .ok_or_else(|| AppError::config_error("sample timestamp out of range"))?;
        match self.parse(&self.format(&sample)) {
            Ok(parsed) if parsed == sample => Ok(()),
            _ => Err(AppError::config_error(format!(
                "datetime_format '{}' does not hold a full date and time to the second",
                self.0
            ))),
        }
    }

    /// Parse a timestamp as UTC. Surrounding whitespace is ignored.
    ///
    /// When the pattern carries an offset (`%z`, `%:z`) the offset is applied; otherwise the
    /// text is taken to be UTC.
    pub fn parse(&self, value: &str) -> Result<DateTime<Utc>, AppError> {
        let text = value.trim();
        let parsed = match DateTime::<FixedOffset>::parse_from_str(text, &self.0) {
            Ok(at) => Ok(at.with_timezone(&Utc)),
            Err(err) if err.kind() == ParseErrorKind::NotEnough => {
                NaiveDateTime::parse_from_str(text, &self.0).map(|naive| naive.and_utc())
            }
            Err(err) => Err(err),
        };
        parsed.map_err(|source| AppError::InvalidTimestamp {
            value: value.to_string(),
            format: self.0.clone(),
            source,
        })
    }

    /// Format in UTC; an offset in the pattern is written as `+00:00`.
    pub fn format(&self, value: &DateTime<Utc>) -> String {
        value.format(&self.0).to_string()
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATETIME_FORMAT)
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The interval over which a metadata record applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Decode a span from its two table columns, rejecting intervals that end before they start.
    pub fn decode(
        kind: &'static str,
        start: &str,
        end: &str,
        format: &TimeFormat,
    ) -> Result<Self, AppError> {
        let span = Self::new(format.parse(start)?, format.parse(end)?);
        if span.end < span.start {
            return Err(AppError::InvalidSpan {
                kind,
                start: format.format(&span.start),
                end: format.format(&span.end),
            });
        }
        Ok(span)
    }

    /// Encode as the start and end columns.
    pub fn encode(&self, format: &TimeFormat) -> [String; 2] {
        [format.format(&self.start), format.format(&self.end)]
    }

    /// Whether `at` falls within the span, both ends inclusive.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }

    /// Whether the two spans share more than a boundary instant.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}
