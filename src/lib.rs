//! sensor-meta: typed, sorted, lossless codec for time-bounded sensor network metadata tables.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::Path;

use adapters::CsvTableStore;
use domain::load_sorted;

pub use adapters::MemoryTableStore;
pub use app::AppContext;
pub use domain::{
    AppError, Catalog, Gain, GainList, MetaConfig, MetaList, MetaRecord, NaturalKey, Number,
    Scale, Span, Stream, StreamList, Table, TimeFormat,
};
pub use ports::TableSource;

/// Load the gains table at `path`, sorted, using the default timestamp layout.
pub fn load_gains(path: impl AsRef<Path>) -> Result<Vec<Gain>, AppError> {
    load_sorted(&CsvTableStore::new(), path.as_ref(), &TimeFormat::default())
}

/// Load the streams table at `path`, sorted, using the default timestamp layout.
pub fn load_streams(path: impl AsRef<Path>) -> Result<Vec<Stream>, AppError> {
    load_sorted(&CsvTableStore::new(), path.as_ref(), &TimeFormat::default())
}

/// Load every configured table of the snapshot at `root`.
///
/// Reads `root/meta.toml` when present.
pub fn load_catalog(root: impl AsRef<Path>) -> Result<Catalog, AppError> {
    let root = root.as_ref();
    let config = adapters::load_meta_config(root, None)?;
    Catalog::load(&CsvTableStore::new(), root, &config)
}
