//! Table source port definition.

use std::path::Path;

use crate::domain::{AppError, Table};

/// Reads and writes the tabular text behind a record list.
///
/// Implementations only move rows of cells; interpreting them is the list codec's job.
pub trait TableSource {
    /// Read every row at `path`, header included.
    fn read_table(&self, path: &Path) -> Result<Table, AppError>;

    /// Replace the contents at `path` with `table`.
    fn write_table(&self, path: &Path, table: &Table) -> Result<(), AppError>;
}
