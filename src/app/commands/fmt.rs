//! Rewrite a metadata table in canonical form: sorted rows, trimmed cells, the fixed header.
//!
//! Numeric cells keep their source text, so formatting never changes how a value was written.

use std::path::PathBuf;

use log::info;

use super::RecordKind;
use crate::app::AppContext;
use crate::domain::{AppError, Gain, MetaList, MetaRecord, Stream, Table, TimeFormat};
use crate::ports::TableSource;

/// Options for the fmt command.
#[derive(Debug, Clone)]
pub struct FmtOptions {
    pub kind: RecordKind,
    pub path: PathBuf,
    /// Report a non-canonical file as an error instead of rewriting it.
    pub check: bool,
}

/// Output of the fmt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FmtOutcome {
    pub records: usize,
    pub changed: bool,
}

/// Execute the fmt command.
pub fn execute<S: TableSource>(
    ctx: &AppContext<S>,
    options: &FmtOptions,
) -> Result<FmtOutcome, AppError> {
    let path = ctx.root().join(&options.path);
    let table = ctx.source().read_table(&path)?;

    let (canonical, records) = match options.kind {
        RecordKind::Gains => canonicalize::<Gain>(&table, ctx.format())?,
        RecordKind::Streams => canonicalize::<Stream>(&table, ctx.format())?,
    };
    let changed = canonical != table;

    if changed {
        if options.check {
            return Err(AppError::NotCanonical(options.path.display().to_string()));
        }
        ctx.source().write_table(&path, &canonical)?;
        info!("formatted {} {} records in {}", records, options.kind.name(), path.display());
    }

    Ok(FmtOutcome { records, changed })
}

/// Decode, sort and re-encode a table.
pub fn canonicalize<R: MetaRecord>(
    table: &Table,
    format: &TimeFormat,
) -> Result<(Table, usize), AppError> {
    let mut list = MetaList::<R>::default();
    list.decode(table, format)?;
    list.sort();
    Ok((list.encode(format), list.len()))
}
