/// Rows of string cells as read from or written to a tabular text file.
///
/// The first row is the header; the rest are data rows. Rows are not required to share a
/// width, so that the codec for each record kind can report the offending row itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Start a table with the given header row.
    pub fn with_header(header: &[&str]) -> Self {
        Self { rows: vec![header.iter().map(|h| h.to_string()).collect()] }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Data rows, i.e. everything after the header.
    pub fn records(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R, C> FromIterator<R> for Table
where
    R: IntoIterator<Item = C>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|row| row.into_iter().map(Into::into).collect()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_skip_header() {
        let table: Table = [vec!["A", "B"], vec!["1", "2"], vec!["3"]].into_iter().collect();
        assert_eq!(table.header().unwrap(), ["A", "B"]);
        assert_eq!(table.records().len(), 2);
        assert_eq!(table.records()[1], ["3"]);
    }

    #[test]
    fn empty_table_has_no_records() {
        let table = Table::default();
        assert!(table.header().is_none());
        assert!(table.records().is_empty());
    }
}
