// Code generated by sensor-meta generate. DO NOT EDIT.

use std::path::Path;

use crate::domain::{AppError, MetaList, NaturalKey, TimeFormat, join_key, load_list};
use crate::ports::TableSource;
use super::fixture_records::{
    Gain,
    Mark,
    Stream,
};

/// Sorted `gains` records, read from `gains.csv`.
pub type GainList = MetaList<Gain>;

/// Sorted `marks` records, read from `marks.csv`.
pub type MarkList = MetaList<Mark>;

/// Sorted `streams` records, read from `streams.csv`.
pub type StreamList = MetaList<Stream>;

impl NaturalKey for Mark {
    type Key = String;

    fn natural_key(&self) -> String {
        join_key(&[self.code.as_str()])
    }
}

/// Every record list of one metadata snapshot.
#[derive(Debug, Clone, Default)]
pub struct Set {
    gains: GainList,
    marks: MarkList,
    streams: StreamList,
}

impl Set {
    /// Load and sort every list under `root`, rejecting duplicate natural keys.
    pub fn load<S>(source: &S, root: &Path, format: &TimeFormat) -> Result<Self, AppError>
    where
        S: TableSource + ?Sized,
    {
        let mut set = Set::default();

        load_list(source, &root.join("gains.csv"), &mut set.gains, format)?;
        set.gains.sort();

        load_list(source, &root.join("marks.csv"), &mut set.marks, format)?;
        set.marks.sort();
        set.marks.ensure_unique()?;

        load_list(source, &root.join("streams.csv"), &mut set.streams, format)?;
        set.streams.sort();

        Ok(set)
    }

    pub fn gains(&self) -> &[Gain] {
        &self.gains
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    /// Find the `Mark` with the given code.
    pub fn mark(&self, code: &str) -> Option<&Mark> {
        self.marks
            .iter()
            .find(|v| v.code == code)
    }
}
