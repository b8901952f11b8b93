use std::cmp::Ordering;

use serde::Serialize;

use super::{AppError, MetaList, MetaRecord, Number, Span, TimeFormat};

const STATION: usize = 0;
const LOCATION: usize = 1;
const BAND: usize = 2;
const SOURCE: usize = 3;
const SAMPLING_RATE: usize = 4;
const AXIAL: usize = 5;
const REVERSED: usize = 6;
const TRIGGERED: usize = 7;
const START: usize = 8;
const END: usize = 9;

/// A recorded channel at a station location over a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stream {
    pub station: String,
    pub location: String,
    pub band: String,
    pub source: String,
    /// Samples per second. A negative source value is a period in seconds and is stored as its
    /// rate; the source text is kept unchanged.
    pub sampling_rate: Number,
    pub axial: String,
    pub reversed: bool,
    pub triggered: bool,
    pub span: Span,
}

/// Sorted list of recorded streams.
pub type StreamList = MetaList<Stream>;

impl Stream {
    /// The sampling period in seconds.
    pub fn sampling_period(&self) -> f64 {
        1.0 / self.sampling_rate.value()
    }
}

/// Parse the boolean tokens accepted in metadata tables.
pub fn parse_bool(text: &str) -> Result<bool, AppError> {
    match text.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(AppError::InvalidBool(other.to_string())),
    }
}

/// Numeric order where `-0` equals `0` and NaN sorts after every rate.
fn compare_rates(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

impl MetaRecord for Stream {
    const KIND: &'static str = "stream";
    const HEADER: &'static [&'static str] = &[
        "Station",
        "Location",
        "Band",
        "Source",
        "Sampling Rate",
        "Axial",
        "Reversed",
        "Triggered",
        "Start Date",
        "End Date",
    ];

    fn encode_row(&self, format: &TimeFormat) -> Vec<String> {
        let [start, end] = self.span.encode(format);
        vec![
            self.station.trim().to_string(),
            self.location.trim().to_string(),
            self.band.trim().to_string(),
            self.source.trim().to_string(),
            self.sampling_rate.text().to_string(),
            self.axial.trim().to_string(),
            self.reversed.to_string(),
            self.triggered.to_string(),
            start,
            end,
        ]
    }

    fn decode_row(row: &[String], format: &TimeFormat) -> Result<Self, AppError> {
        let span = Span::decode(Self::KIND, &row[START], &row[END], format)?;
        let sampling_rate = Number::parse_float(&row[SAMPLING_RATE])?
            .map(|rate| if rate < 0.0 { -1.0 / rate } else { rate });
        let reversed = parse_bool(&row[REVERSED])?;
        let triggered = parse_bool(&row[TRIGGERED])?;

        Ok(Stream {
            station: row[STATION].trim().to_string(),
            location: row[LOCATION].trim().to_string(),
            band: row[BAND].trim().to_string(),
            source: row[SOURCE].trim().to_string(),
            sampling_rate,
            axial: row[AXIAL].trim().to_string(),
            reversed,
            triggered,
            span,
        })
    }

    /// Band is not part of the order, unlike the sublocation of a gain.
    fn order(&self, other: &Self) -> Ordering {
        self.station
            .cmp(&other.station)
            .then_with(|| self.location.cmp(&other.location))
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| compare_rates(self.sampling_rate.value(), other.sampling_rate.value()))
            .then_with(|| self.span.start.cmp(&other.span.start))
    }
}
