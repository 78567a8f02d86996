//! Tabular records and tables
//!
//! A [`Record`] maps column names to optional string values. `None` is the
//! first-class "absent" state produced by empty cells; a column that is not
//! present at all reads the same way.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of a table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    cells: IndexMap<String, Option<String>>,
}

impl Record {
    /// Create empty record
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a present value
    #[inline]
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.cells.insert(column.into(), Some(value.into()));
        self
    }

    /// With an explicitly absent value
    #[inline]
    #[must_use]
    pub fn with_absent(mut self, column: impl Into<String>) -> Self {
        self.cells.insert(column.into(), None);
        self
    }

    /// Set a cell, replacing any previous value
    #[inline]
    pub fn set(&mut self, column: impl Into<String>, value: Option<String>) {
        self.cells.insert(column.into(), value);
    }

    /// Present value of a column
    ///
    /// Returns `None` both for absent cells and for columns the record does
    /// not carry.
    #[inline]
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).and_then(Option::as_deref)
    }

    /// Column names in insertion order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// All cells in insertion order
    pub fn cells(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Number of cells (present or absent)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if record has no cells
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        }
    }
}

impl<const N: usize> From<[(&str, Option<&str>); N]> for Record {
    fn from(cells: [(&str, Option<&str>); N]) -> Self {
        cells.into_iter().collect()
    }
}

/// Ordered rows sharing a column list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    /// Create table with a header and no rows
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Create table from rows, deriving the header from first-seen columns
    #[must_use]
    pub fn from_rows<I: IntoIterator<Item = Record>>(rows: I) -> Self {
        let mut table = Self::default();
        for row in rows {
            table.push(row);
        }
        table
    }

    /// Append a row; columns the header has not seen yet are appended to it
    pub fn push(&mut self, row: Record) {
        for column in row.columns() {
            if !self.columns.iter().any(|c| c == column) {
                self.columns.push(column.to_string());
            }
        }
        self.rows.push(row);
    }

    /// Concatenate tables (column union, rows in order)
    ///
    /// Rows keep only the cells they had; a column contributed by another
    /// table reads as absent for them.
    #[must_use]
    pub fn concat<I: IntoIterator<Item = Table>>(tables: I) -> Self {
        let mut out = Self::default();
        for table in tables {
            for column in table.columns {
                if !out.columns.contains(&column) {
                    out.columns.push(column);
                }
            }
            out.rows.extend(table.rows);
        }
        out
    }

    /// Header in display order
    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in input order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Check if header carries a column
    #[inline]
    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Values of one column, top to bottom
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = Option<&'a str>> {
        self.rows.iter().map(move |row| row.get(column))
    }

    /// Value of a column in the first row
    #[must_use]
    pub fn first_value(&self, column: &str) -> Option<&str> {
        self.rows.first().and_then(|row| row.get(column))
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if table has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_get_treats_missing_and_absent_alike() {
        let record = Record::new().with("SOI", "S").with_absent("Subsystem");
        assert_eq!(record.get("SOI"), Some("S"));
        assert_eq!(record.get("Subsystem"), None);
        assert_eq!(record.get("Assembly"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn record_from_array() {
        let record = Record::from([("Mission", Some("M1")), ("Env", None)]);
        assert_eq!(record.get("Mission"), Some("M1"));
        assert_eq!(record.columns().collect::<Vec<_>>(), vec!["Mission", "Env"]);
    }

    #[test]
    fn table_push_extends_header() {
        let mut table = Table::new(["SOI"]);
        table.push(Record::new().with("SOI", "S").with("Subsystem", "A"));
        assert_eq!(table.columns(), ["SOI", "Subsystem"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn table_concat_unions_columns() {
        let subsystems = Table::from_rows([Record::new().with("SOI", "S").with("Subsystem", "A")]);
        let assemblies = Table::from_rows([Record::new()
            .with("SOI", "S")
            .with("Subsystem", "A")
            .with("Assembly", "X")]);

        let all = Table::concat([subsystems, assemblies]);
        assert_eq!(all.columns(), ["SOI", "Subsystem", "Assembly"]);
        assert_eq!(all.len(), 2);
        assert_eq!(
            all.column_values("Assembly").collect::<Vec<_>>(),
            vec![None, Some("X")]
        );
    }

    #[test]
    fn table_first_value() {
        let table = Table::from_rows([Record::new().with("tripleCount", "1234")]);
        assert_eq!(table.first_value("tripleCount"), Some("1234"));
        assert_eq!(Table::default().first_value("tripleCount"), None);
    }
}
