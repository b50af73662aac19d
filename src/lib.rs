//! Sirocco - a terminal-based CSV viewer and plotter.
//!
//! Sirocco provides an interactive terminal interface for browsing a
//! directory, loading CSV files into a tabular view, and rendering
//! scatter/line/bar charts inline with selectable backends.
//!
//! # Features
//!
//! - Directory browser with vim-style navigation
//! - Tabular view of the loaded CSV data
//! - Scatter, line, and bar charts with an optional color/group column
//! - Two chart backends: braille text-art and half-block raster
//! - Column-name autocomplete for the axis inputs
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use sirocco::data::Dataset;
//! use std::path::Path;
//!
//! // Load a CSV file
//! let dataset = Dataset::from_path(Path::new("data.csv"))?;
//! println!("{} columns, {} rows", dataset.column_count(), dataset.row_count());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod file_browser;
pub mod plot;
pub mod plot_form;
pub mod table;
pub mod ui;

pub use error::{Result, SiroccoError};
