//! Data reading and representation.
//!
//! This module handles reading CSV files into an in-memory tabular dataset:
//! ordered column names plus rows of string cells, with on-demand numeric
//! access for plotting.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, SiroccoError};

/// An in-memory tabular dataset loaded from a CSV file.
///
/// Every row holds exactly `columns.len()` cells; the strict CSV reader
/// rejects ragged input, so the invariant holds by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Column names, in file order.
    pub columns: Vec<String>,
    /// Data rows, each a sequence of cells aligned with `columns`.
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Read a CSV file into a dataset.
    ///
    /// The first record is taken as the header row. Ragged rows (cell count
    /// differing from the header) are a parse error, not a partial load.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(false)
            .from_path(path)
            .map_err(|e| SiroccoError::csv(path.to_path_buf(), &e))?;

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| SiroccoError::csv(path.to_path_buf(), &e))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| SiroccoError::csv(path.to_path_buf(), &e))?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        tracing::debug!(
            "Loaded {}: {} columns, {} rows",
            path.display(),
            columns.len(),
            rows.len()
        );

        Ok(Self { columns, rows })
    }

    /// True when the dataset holds no columns and no rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a named column.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| SiroccoError::column_not_found(name))
    }

    /// Parse a named column as `f64` values, one per row.
    ///
    /// The first cell that fails to parse aborts with a `ColumnNotNumeric`
    /// error naming the offending row and value.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self.column_index(name)?;
        let mut values = Vec::with_capacity(self.rows.len());
        for (row_no, row) in self.rows.iter().enumerate() {
            let cell = row[idx].trim();
            let value: f64 = cell
                .parse()
                .map_err(|_| SiroccoError::column_not_numeric(name, row_no + 1, cell))?;
            values.push(value);
        }
        Ok(values)
    }

    /// Distinct values of a named column, in order of first appearance.
    pub fn distinct_values(&self, name: &str) -> Result<Vec<String>> {
        let idx = self.column_index(name)?;
        let mut seen = HashSet::new();
        let mut distinct = Vec::new();
        for row in &self.rows {
            let cell = &row[idx];
            if seen.insert(cell.clone()) {
                distinct.push(cell.clone());
            }
        }
        Ok(distinct)
    }

    /// Partition row indices by the distinct values of a named column.
    ///
    /// Groups come back in first-appearance order; row indices within a
    /// group preserve file order.
    pub fn partition_indices(&self, name: &str) -> Result<Vec<(String, Vec<usize>)>> {
        let idx = self.column_index(name)?;
        let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
        for (row_no, row) in self.rows.iter().enumerate() {
            let cell = &row[idx];
            match groups.iter_mut().find(|(value, _)| value == cell) {
                Some((_, indices)) => indices.push(row_no),
                None => groups.push((cell.clone(), vec![row_no])),
            }
        }
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_columns_and_rows_in_order() {
        let file = write_csv("a,b,c\n1,2,x\n3,4,y\n");
        let ds = Dataset::from_path(file.path()).unwrap();
        assert_eq!(ds.columns, vec!["a", "b", "c"]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.rows[0], vec!["1", "2", "x"]);
        assert_eq!(ds.rows[1], vec!["3", "4", "y"]);
    }

    #[test]
    fn ragged_rows_are_a_parse_error() {
        let file = write_csv("a,b\n1,2\n3\n");
        assert!(Dataset::from_path(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Dataset::from_path(Path::new("/no/such/file.csv")).is_err());
    }

    #[test]
    fn numeric_column_parses_values() {
        let file = write_csv("x,y\n1, 2.5\n-3,4e1\n");
        let ds = Dataset::from_path(file.path()).unwrap();
        assert_eq!(ds.numeric_column("x").unwrap(), vec![1.0, -3.0]);
        assert_eq!(ds.numeric_column("y").unwrap(), vec![2.5, 40.0]);
    }

    #[test]
    fn numeric_column_reports_bad_cell() {
        let file = write_csv("x\n1\noops\n");
        let ds = Dataset::from_path(file.path()).unwrap();
        match ds.numeric_column("x").unwrap_err() {
            SiroccoError::ColumnNotNumeric { column, row, value } => {
                assert_eq!(column, "x");
                assert_eq!(row, 2);
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_column_is_reported() {
        let file = write_csv("a\n1\n");
        let ds = Dataset::from_path(file.path()).unwrap();
        assert!(matches!(
            ds.numeric_column("z"),
            Err(SiroccoError::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn distinct_values_keep_first_appearance_order() {
        let file = write_csv("g\nb\na\nb\nc\na\n");
        let ds = Dataset::from_path(file.path()).unwrap();
        assert_eq!(ds.distinct_values("g").unwrap(), vec!["b", "a", "c"]);
    }

    #[test]
    fn partition_groups_rows_by_value() {
        let file = write_csv("g,v\nred,1\nblue,2\nred,3\n");
        let ds = Dataset::from_path(file.path()).unwrap();
        let groups = ds.partition_indices("g").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], ("red".to_string(), vec![0, 2]));
        assert_eq!(groups[1], ("blue".to_string(), vec![1]));
    }
}
