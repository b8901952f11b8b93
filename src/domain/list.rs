//! The list codec contract shared by every record kind.
//!
//! A record kind describes its columns, how one row maps to and from a record, and its sort
//! order. [`MetaList`] supplies the rest: whole-table encode and decode, sorting, and
//! natural-key checks for kinds that declare a key.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::Deref;
use std::path::Path;

use log::debug;
use serde::Serialize;

use super::{AppError, Table, TimeFormat};
use crate::ports::TableSource;

/// A record kind that can be stored as one row of a metadata table.
pub trait MetaRecord: Sized + Clone {
    /// Singular kind name used in error messages, e.g. `gain`.
    const KIND: &'static str;

    /// Column names in table order.
    const HEADER: &'static [&'static str];

    fn encode_row(&self, format: &TimeFormat) -> Vec<String>;

    /// Decode a row already known to have `HEADER.len()` cells.
    fn decode_row(row: &[String], format: &TimeFormat) -> Result<Self, AppError>;

    /// Display and diffing order.
    fn order(&self, other: &Self) -> Ordering;

    fn less(&self, other: &Self) -> bool {
        self.order(other) == Ordering::Less
    }
}

/// A record kind whose entries must be unique over a subset of their fields.
pub trait NaturalKey {
    type Key: Ord + Display;

    fn natural_key(&self) -> Self::Key;
}

/// Join natural-key fields with `:`, escaping `\` and `:` inside fields so distinct field
/// tuples never produce the same key.
pub fn join_key(fields: &[&str]) -> String {
    let mut key = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            key.push(':');
        }
        for c in field.chars() {
            if c == '\\' || c == ':' {
                key.push('\\');
            }
            key.push(c);
        }
    }
    key
}

/// Sorted, owned list of records of one kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetaList<R>(Vec<R>);

impl<R> Default for MetaList<R> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<R: MetaRecord> MetaList<R> {
    /// Build a list from records, sorting them.
    pub fn new(records: Vec<R>) -> Self {
        let mut list = Self(records);
        list.sort();
        list
    }

    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| a.order(b));
    }

    pub fn into_inner(self) -> Vec<R> {
        self.0
    }

    /// Header row followed by one row per record, in list order.
    pub fn encode(&self, format: &TimeFormat) -> Table {
        let mut table = Table::with_header(R::HEADER);
        for record in &self.0 {
            table.push(record.encode_row(format));
        }
        table
    }

    /// Replace the list contents with the rows of `table`.
    ///
    /// Either every data row decodes and the list is replaced, or the first failing row's
    /// error is returned and the list is left as it was. The decoded list keeps table order;
    /// call [`MetaList::sort`] to restore display order.
    pub fn decode(&mut self, table: &Table, format: &TimeFormat) -> Result<(), AppError> {
        let mut records = Vec::with_capacity(table.records().len());
        for row in table.records() {
            if row.len() != R::HEADER.len() {
                return Err(AppError::MalformedRow {
                    kind: R::KIND,
                    expected: R::HEADER.len(),
                    found: row.len(),
                });
            }
            records.push(R::decode_row(row, format)?);
        }

        self.0 = records;
        Ok(())
    }
}

impl<R: MetaRecord + NaturalKey> MetaList<R> {
    /// Keys shared by more than one record, each listed once.
    pub fn duplicates(&self) -> Vec<R::Key> {
        let mut counts: BTreeMap<R::Key, usize> = BTreeMap::new();
        for record in &self.0 {
            *counts.entry(record.natural_key()).or_default() += 1;
        }
        counts.into_iter().filter(|(_, n)| *n > 1).map(|(key, _)| key).collect()
    }

    pub fn ensure_unique(&self) -> Result<(), AppError> {
        match self.duplicates().into_iter().next() {
            Some(key) => Err(AppError::DuplicateKey { kind: R::KIND, key: key.to_string() }),
            None => Ok(()),
        }
    }

    /// Find the record with the given key.
    pub fn lookup(&self, key: &R::Key) -> Option<&R> {
        self.0.iter().find(|record| record.natural_key() == *key)
    }
}

impl<R> Deref for MetaList<R> {
    type Target = [R];

    fn deref(&self) -> &[R] {
        &self.0
    }
}

impl<R> IntoIterator for MetaList<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a MetaList<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Read the table at `path` and decode it into `list`.
///
/// Errors from the source and from decoding are returned unchanged.
pub fn load_list<S, R>(
    source: &S,
    path: &Path,
    list: &mut MetaList<R>,
    format: &TimeFormat,
) -> Result<(), AppError>
where
    S: TableSource + ?Sized,
    R: MetaRecord,
{
    let table = source.read_table(path)?;
    list.decode(&table, format)?;
    debug!("decoded {} {} records from {}", list.len(), R::KIND, path.display());
    Ok(())
}

/// Load, decode and sort the records at `path`.
pub fn load_sorted<S, R>(source: &S, path: &Path, format: &TimeFormat) -> Result<Vec<R>, AppError>
where
    S: TableSource + ?Sized,
    R: MetaRecord,
{
    let mut list = MetaList::default();
    load_list(source, path, &mut list, format)?;
    list.sort();
    Ok(list.into_inner())
}

/// Sort `records` and write them to `path`.
pub fn store_sorted<S, R>(
    source: &S,
    path: &Path,
    records: Vec<R>,
    format: &TimeFormat,
) -> Result<(), AppError>
where
    S: TableSource + ?Sized,
    R: MetaRecord,
{
    let list = MetaList::new(records);
    source.write_table(path, &list.encode(format))?;
    debug!("wrote {} {} records to {}", list.len(), R::KIND, path.display());
    Ok(())
}
