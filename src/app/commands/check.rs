use log::warn;

use crate::app::AppContext;
use crate::domain::{AppError, Catalog, GainOverlap};
use crate::ports::TableSource;

/// Result of checking a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub gains: usize,
    pub streams: usize,
    pub overlaps: Vec<GainOverlap>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.overlaps.is_empty()
    }
}

/// Execute the check command: load every configured table and look for overlapping gains.
pub fn execute<S: TableSource>(ctx: &AppContext<S>) -> Result<CheckReport, AppError> {
    let catalog = Catalog::load(ctx.source(), ctx.root(), ctx.config())?;
    let overlaps = catalog.gain_overlaps();

    for overlap in &overlaps {
        warn!(
            "gain {} has overlapping spans starting {} and {}",
            overlap.first.id(),
            overlap.first.span.start,
            overlap.second.span.start
        );
    }

    Ok(CheckReport { gains: catalog.gains().len(), streams: catalog.streams().len(), overlaps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryTableStore;
    use crate::domain::{Gain, MetaConfig, MetaRecord, Stream, Table};
    use std::path::Path;

    fn table(header: &[&str], rows: &[&[&str]]) -> Table {
        std::iter::once(header).chain(rows.iter().copied()).map(|row| row.iter().copied()).collect()
    }

    fn context(gains: &[&[&str]]) -> AppContext<MemoryTableStore> {
        let store = MemoryTableStore::new();
        store.insert(Path::new("install/gains.csv"), table(Gain::HEADER, gains));
        store.insert(
            Path::new("install/streams.csv"),
            table(
                Stream::HEADER,
                &[&[
                    "WEL",
                    "10",
                    "H",
                    "H",
                    "100",
                    "",
                    "false",
                    "false",
                    "2010-01-01T00:00:00Z",
                    "9999-01-01T00:00:00Z",
                ]],
            ),
        );
        AppContext::new(store, MetaConfig::default(), "")
    }

    #[test]
    fn clean_snapshot() {
        let ctx = context(&[
            &["WEL", "20", "", "Z", "2", "", "", "2010-01-01T00:00:00Z", "2012-01-01T00:00:00Z"],
            &["WEL", "20", "", "Z", "3", "", "", "2012-01-01T00:00:00Z", "9999-01-01T00:00:00Z"],
        ]);
        let report = execute(&ctx).unwrap();
        assert_eq!(report.gains, 2);
        assert_eq!(report.streams, 1);
        assert!(report.is_clean());
    }

    #[test]
    fn overlapping_gains_are_reported() {
        let ctx = context(&[
            &["WEL", "20", "", "ZN", "2", "", "", "2010-01-01T00:00:00Z", "2013-01-01T00:00:00Z"],
            &["WEL", "20", "", "Z", "3", "", "", "2012-01-01T00:00:00Z", "9999-01-01T00:00:00Z"],
        ]);
        let report = execute(&ctx).unwrap();
        assert!(!report.is_clean());
        assert_eq!(report.overlaps[0].first.id(), "WEL:20:Z");
    }

    #[test]
    fn decode_errors_propagate() {
        let ctx = context(&[&["WEL", "20", "", "Z"]]);
        let err = execute(&ctx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "incorrect number of installed gain fields: expected 9, found 4"
        );
    }
}
