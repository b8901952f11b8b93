//! Record types imported by the rendered set in `fixture_set.rs`.

use std::cmp::Ordering;

use crate::domain::{AppError, MetaRecord, TimeFormat};

pub use crate::domain::{Gain, Stream};

/// Keyed record: `Code, Name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub code: String,
    pub name: String,
}

impl MetaRecord for Mark {
    const KIND: &'static str = "mark";
    const HEADER: &'static [&'static str] = &["Code", "Name"];

    fn encode_row(&self, _format: &TimeFormat) -> Vec<String> {
        vec![self.code.clone(), self.name.clone()]
    }

    fn decode_row(row: &[String], _format: &TimeFormat) -> Result<Self, AppError> {
        Ok(Self { code: row[0].trim().to_string(), name: row[1].trim().to_string() })
    }

    fn order(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}
