//! Tabular data files
//!
//! [`TableReader`] is the seam renderers read project data through.
//! [`CsvTableReader`] reads the CSV conversions found in project folders.

use crate::error::TableError;
use ontodash_graph::{Record, Table};
use std::io::Read;
use std::path::Path;

/// Cell text read as absent (alongside the empty cell)
///
/// The usual null spellings of spreadsheet and dataframe exports.
pub const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Source of tables
pub trait TableReader {
    /// Read one table
    ///
    /// # Errors
    /// [`TableError::NotFound`] if the file is absent, [`TableError::Parse`]
    /// on malformed content.
    fn read_table(&self, path: &Path) -> Result<Table, TableError>;

    /// Check if a data file (table or export) exists at `path`
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Header-first CSV reader
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableReader;

impl CsvTableReader {
    /// Create reader
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Read CSV text from any source; `origin` is used in errors only
    ///
    /// # Errors
    /// Returns [`TableError::Parse`] on malformed CSV or rows wider than the
    /// header.
    pub fn read_from<R: Read>(source: R, origin: &Path) -> Result<Table, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(source);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| TableError::parse_error(origin, e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut table = Table::new(headers.iter().cloned());
        for (line, result) in reader.records().enumerate() {
            let row = result.map_err(|e| TableError::parse_error(origin, e.to_string()))?;
            if row.len() > headers.len() {
                return Err(TableError::parse_error(
                    origin,
                    format!(
                        "row {} has {} fields, header has {}",
                        line + 1,
                        row.len(),
                        headers.len()
                    ),
                ));
            }

            // Short rows read as absent in the missing trailing columns
            let record: Record = headers
                .iter()
                .enumerate()
                .map(|(i, column)| (column.as_str(), row.get(i).filter(|cell| !is_na(cell))))
                .collect();
            table.push(record);
        }

        tracing::debug!(
            path = %origin.display(),
            rows = table.len(),
            columns = table.columns().len(),
            "read table"
        );
        Ok(table)
    }
}

impl TableReader for CsvTableReader {
    fn read_table(&self, path: &Path) -> Result<Table, TableError> {
        let file = std::fs::File::open(path).map_err(|e| TableError::io_error(path, e))?;
        Self::read_from(std::io::BufReader::new(file), path)
    }
}

fn is_na(cell: &str) -> bool {
    cell.is_empty() || NA_TOKENS.contains(&cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read(text: &str) -> Result<Table, TableError> {
        CsvTableReader::read_from(text.as_bytes(), Path::new("inline.csv"))
    }

    #[test]
    fn reads_header_and_rows() {
        let table = read("SOI,Subsystem\nRover,Drive\nRover,Frame\n").unwrap();

        assert_eq!(table.columns(), ["SOI", "Subsystem"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].get("Subsystem"), Some("Frame"));
    }

    #[test]
    fn empty_and_na_cells_are_absent() {
        let table = read("SOI,Subsystem,Assembly\nRover,,NaN\nRover,N/A,Wheel\n").unwrap();

        assert_eq!(table.rows()[0].get("Subsystem"), None);
        assert_eq!(table.rows()[0].get("Assembly"), None);
        assert_eq!(table.rows()[1].get("Subsystem"), None);
        assert_eq!(table.rows()[1].get("Assembly"), Some("Wheel"));
    }

    #[test]
    fn short_rows_pad_with_absent() {
        let table = read("SOI,Subsystem\nRover\n").unwrap();
        assert_eq!(table.rows()[0].get("SOI"), Some("Rover"));
        assert_eq!(table.rows()[0].get("Subsystem"), None);
    }

    #[test]
    fn wide_rows_are_parse_errors() {
        let err = read("SOI\nRover,Drive\n").unwrap_err();
        assert!(matches!(err, TableError::Parse { .. }));
    }

    #[test]
    fn header_only_is_empty_table() {
        let table = read("tripleCount\n").unwrap();
        assert!(table.is_empty());
        assert!(table.has_column("tripleCount"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvTableReader::new()
            .read_table(&dir.path().join("Subsystems.csv"))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
