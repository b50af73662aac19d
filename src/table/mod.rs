//! Table feature - scrollable tabular view of the loaded dataset.
//!
//! State management for the table panel; rendering lives in [`ui`].

pub mod ui;

use crate::data::Dataset;

/// Table view state: scroll offsets into the dataset.
#[derive(Debug, Default)]
pub struct TableViewState {
    /// First visible data row.
    pub row_offset: usize,
    /// First visible column.
    pub col_offset: usize,
}

impl TableViewState {
    /// Create a new table view state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset scrolling, called when the dataset is replaced.
    pub fn reset(&mut self) {
        self.row_offset = 0;
        self.col_offset = 0;
    }

    /// Scroll down by `n` rows, clamped to the dataset.
    pub fn scroll_down(&mut self, n: usize, dataset: &Dataset) {
        let max = dataset.row_count().saturating_sub(1);
        self.row_offset = (self.row_offset + n).min(max);
    }

    /// Scroll up by `n` rows.
    pub fn scroll_up(&mut self, n: usize) {
        self.row_offset = self.row_offset.saturating_sub(n);
    }

    /// Scroll one column right, clamped to the dataset.
    pub fn scroll_right(&mut self, dataset: &Dataset) {
        let max = dataset.column_count().saturating_sub(1);
        self.col_offset = (self.col_offset + 1).min(max);
    }

    /// Scroll one column left.
    pub fn scroll_left(&mut self) {
        self.col_offset = self.col_offset.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: usize, cols: usize) -> Dataset {
        Dataset {
            columns: (0..cols).map(|c| format!("c{c}")).collect(),
            rows: (0..rows)
                .map(|r| (0..cols).map(|c| format!("{r}:{c}")).collect())
                .collect(),
        }
    }

    #[test]
    fn scrolling_clamps_to_dataset_extent() {
        let ds = dataset(3, 2);
        let mut state = TableViewState::new();
        state.scroll_down(10, &ds);
        assert_eq!(state.row_offset, 2);
        state.scroll_right(&ds);
        state.scroll_right(&ds);
        assert_eq!(state.col_offset, 1);
    }

    #[test]
    fn reset_returns_to_origin() {
        let ds = dataset(5, 5);
        let mut state = TableViewState::new();
        state.scroll_down(3, &ds);
        state.scroll_right(&ds);
        state.reset();
        assert_eq!(state.row_offset, 0);
        assert_eq!(state.col_offset, 0);
    }

    #[test]
    fn empty_dataset_never_scrolls() {
        let ds = Dataset::default();
        let mut state = TableViewState::new();
        state.scroll_down(5, &ds);
        state.scroll_right(&ds);
        assert_eq!(state.row_offset, 0);
        assert_eq!(state.col_offset, 0);
    }
}
