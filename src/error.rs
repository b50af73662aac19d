//! Error types for Sirocco.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Sirocco operations.
pub type Result<T> = std::result::Result<T, SiroccoError>;

/// Errors that can occur in Sirocco.
#[derive(Debug, Error)]
pub enum SiroccoError {
    /// Failed to parse a CSV file.
    #[error("CSV error in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// A requested column does not exist in the dataset.
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    /// A cell in a plotted column could not be read as a number.
    #[error("Column '{column}' is not numeric: row {row} holds '{value}'")]
    ColumnNotNumeric {
        column: String,
        row: usize,
        value: String,
    },

    /// Nothing to plot (empty dataset or empty series).
    #[error("No data to plot: {0}")]
    EmptyPlot(String),

    /// Plot kind text did not name a supported chart kind.
    #[error("Unknown plot kind: '{input}' (expected scatter, line, or bar)")]
    UnknownPlotKind { input: String },

    /// A plotting backend failed while drawing.
    #[error("Render error: {0}")]
    Render(String),
}

impl SiroccoError {
    /// Create a Csv error from the csv crate's error type.
    pub fn csv(path: PathBuf, source: &csv::Error) -> Self {
        Self::Csv {
            path,
            message: source.to_string(),
        }
    }

    /// Create a ColumnNotFound error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    /// Create a ColumnNotNumeric error.
    pub fn column_not_numeric(
        column: impl Into<String>,
        row: usize,
        value: impl Into<String>,
    ) -> Self {
        Self::ColumnNotNumeric {
            column: column.into(),
            row,
            value: value.into(),
        }
    }

    /// Create an UnknownPlotKind error.
    pub fn unknown_plot_kind(input: impl Into<String>) -> Self {
        Self::UnknownPlotKind {
            input: input.into(),
        }
    }
}
