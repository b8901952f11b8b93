use std::cmp::Ordering;

use serde::Serialize;

use super::{AppError, MetaList, MetaRecord, Number, Scale, Span, TimeFormat};

const STATION: usize = 0;
const LOCATION: usize = 1;
const SUBLOCATION: usize = 2;
const SUBSOURCE: usize = 3;
const SCALE_FACTOR: usize = 4;
const SCALE_BIAS: usize = 5;
const ABSOLUTE_BIAS: usize = 6;
const START: usize = 7;
const END: usize = 8;

/// An installation scaling or offset applied to a sensor's existing response over a period.
///
/// For a sensor already described by `A * X + B`, the gain's scale `A'`, bias `B'` and absolute
/// bias `C` combine to `A * A' * X + B * A' + A * B' + C`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gain {
    pub station: String,
    pub location: String,
    pub sublocation: String,
    /// One or more single-character components, e.g. `ZNE`.
    pub subsource: String,
    pub span: Span,
    pub scale: Scale,
    pub absolute: Number,
}

/// Sorted list of installed gains.
pub type GainList = MetaList<Gain>;

impl Gain {
    /// Lookup key `station:location:subsource`.
    ///
    /// Sublocation and the span are not part of the key, so several gains may share it.
    pub fn id(&self) -> String {
        [self.station.as_str(), self.location.as_str(), self.subsource.as_str()].join(":")
    }

    /// The single-character components of the subsource, in their written order.
    pub fn subsources(&self) -> Vec<String> {
        self.subsource.chars().map(String::from).collect()
    }

    /// One gain per subsource component, sorted.
    pub fn gains(&self) -> Vec<Gain> {
        let mut gains: Vec<Gain> = self
            .subsources()
            .into_iter()
            .map(|subsource| Gain { subsource, ..self.clone() })
            .collect();
        gains.sort_by(|a, b| a.order(b));
        gains
    }

    /// Combine with an existing sensor response `A * X + B`, returning the adjusted factor and
    /// offset.
    pub fn adjust(&self, response: &Scale) -> (f64, f64) {
        let (a, b) = (response.factor.value(), response.bias.value());
        let (a_gain, b_gain) = (self.scale.factor.value(), self.scale.bias.value());
        (a * a_gain, b * a_gain + a * b_gain + self.absolute.value())
    }
}

impl MetaRecord for Gain {
    const KIND: &'static str = "gain";
    const HEADER: &'static [&'static str] = &[
        "Station",
        "Location",
        "Sublocation",
        "Subsource",
        "Scale Factor",
        "Scale Bias",
        "Absolute Bias",
        "Start Date",
        "End Date",
    ];

    fn encode_row(&self, format: &TimeFormat) -> Vec<String> {
        let [start, end] = self.span.encode(format);
        vec![
            self.station.trim().to_string(),
            self.location.trim().to_string(),
            self.sublocation.trim().to_string(),
            self.subsource.trim().to_string(),
            self.scale.factor.text().to_string(),
            self.scale.bias.text().to_string(),
            self.absolute.text().to_string(),
            start,
            end,
        ]
    }

    fn decode_row(row: &[String], format: &TimeFormat) -> Result<Self, AppError> {
        let scale = Scale::decode(&row[SCALE_FACTOR], &row[SCALE_BIAS])?;
        let absolute = Number::parse_expr_or(&row[ABSOLUTE_BIAS], 0.0)?;
        let span = Span::decode(Self::KIND, &row[START], &row[END], format)?;

        Ok(Gain {
            station: row[STATION].trim().to_string(),
            location: row[LOCATION].trim().to_string(),
            sublocation: row[SUBLOCATION].trim().to_string(),
            subsource: row[SUBSOURCE].trim().to_string(),
            span,
            scale,
            absolute,
        })
    }

    fn order(&self, other: &Self) -> Ordering {
        self.station
            .cmp(&other.station)
            .then_with(|| self.location.cmp(&other.location))
            .then_with(|| self.sublocation.cmp(&other.sublocation))
            .then_with(|| self.subsource.cmp(&other.subsource))
            .then_with(|| self.span.start.cmp(&other.span.start))
    }
}
