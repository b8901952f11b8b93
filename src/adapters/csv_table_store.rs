//! CSV-file implementation of the table source port.

use std::fs;
use std::path::Path;

use log::debug;

use crate::domain::{AppError, Table};
use crate::ports::TableSource;

/// Reads and writes tables as CSV files on the local filesystem.
///
/// Rows keep their width as written, so a short or long row reaches the list codec intact.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableStore;

impl CsvTableStore {
    pub fn new() -> Self {
        Self
    }

    /// Parse CSV text into a table.
    pub fn parse(content: &str) -> Result<Table, AppError> {
        Self::read_from(content.as_bytes())
    }

    /// Render a table as CSV text.
    pub fn render(table: &Table) -> Result<String, AppError> {
        let mut buffer = Vec::new();
        Self::write_to(&mut buffer, table)?;
        into_text(buffer)
    }

    fn read_from<R: std::io::Read>(reader: R) -> Result<Table, AppError> {
        let mut reader =
            csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);

        let mut table = Table::default();
        for record in reader.records() {
            let record = record?;
            table.push(record.iter().map(str::to_string).collect());
        }
        Ok(table)
    }

    fn write_to<W: std::io::Write>(writer: W, table: &Table) -> Result<(), AppError> {
        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
        for row in table.rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn into_text(buffer: Vec<u8>) -> Result<String, AppError> {
    String::from_utf8(buffer)
        .map_err(|e| AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

impl TableSource for CsvTableStore {
    fn read_table(&self, path: &Path) -> Result<Table, AppError> {
        let file = fs::File::open(path)?;
        let table = Self::read_from(file)?;
        debug!("read {} rows from {}", table.rows().len(), path.display());
        Ok(table)
    }

    fn write_table(&self, path: &Path, table: &Table) -> Result<(), AppError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        Self::write_to(file, table)?;
        debug!("wrote {} rows to {}", table.rows().len(), path.display());
        Ok(())
    }
}
