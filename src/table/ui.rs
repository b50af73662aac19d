//! Table UI rendering.

use super::TableViewState;
use crate::data::Dataset;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Widest a rendered column gets before its cells are truncated.
const MAX_COL_WIDTH: u16 = 18;

/// Draw the data table for the loaded dataset.
pub fn draw_table(
    f: &mut Frame<'_>,
    dataset: &Dataset,
    state: &TableViewState,
    area: Rect,
    colors: &ThemeColors,
) {
    let title = if dataset.is_empty() {
        " Data ".to_string()
    } else {
        format!(
            " Data ({} rows x {} cols) ",
            dataset.row_count(),
            dataset.column_count()
        )
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if dataset.is_empty() {
        let hint = Paragraph::new(Line::from("Select a CSV file to load"))
            .style(Style::default().fg(colors.label));
        f.render_widget(hint, inner);
        return;
    }

    // Visible column window from the horizontal scroll offset
    let visible_cols: Vec<usize> = {
        let mut budget = inner.width;
        let mut cols = Vec::new();
        for idx in state.col_offset..dataset.column_count() {
            let width = column_width(dataset, idx).saturating_add(1);
            if width > budget && !cols.is_empty() {
                break;
            }
            budget = budget.saturating_sub(width);
            cols.push(idx);
        }
        cols
    };

    let header = Row::new(
        visible_cols
            .iter()
            .map(|&idx| Cell::from(truncate(&dataset.columns[idx]))),
    )
    .style(
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    );

    let visible_rows = inner.height.saturating_sub(1) as usize;
    let rows = dataset
        .rows
        .iter()
        .skip(state.row_offset)
        .take(visible_rows)
        .map(|row| {
            Row::new(
                visible_cols
                    .iter()
                    .map(|&idx| Cell::from(truncate(&row[idx]))),
            )
            .style(Style::default().fg(colors.text))
        });

    let widths: Vec<Constraint> = visible_cols
        .iter()
        .map(|&idx| Constraint::Length(column_width(dataset, idx)))
        .collect();

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(table, inner);
}

/// Display width for a column: the widest of header and cells, capped.
fn column_width(dataset: &Dataset, idx: usize) -> u16 {
    let mut width = dataset.columns[idx].width();
    for row in &dataset.rows {
        width = width.max(row[idx].width());
    }
    (width as u16).min(MAX_COL_WIDTH).max(3)
}

fn truncate(cell: &str) -> String {
    if cell.width() <= MAX_COL_WIDTH as usize {
        return cell.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in cell.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > MAX_COL_WIDTH as usize - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_cells() {
        assert_eq!(truncate("abc"), "abc");
    }

    #[test]
    fn truncate_caps_long_cells_with_ellipsis() {
        let long = "x".repeat(40);
        let out = truncate(&long);
        assert!(out.ends_with('…'));
        assert!(out.width() <= MAX_COL_WIDTH as usize);
    }

    #[test]
    fn column_width_tracks_widest_cell() {
        let ds = Dataset {
            columns: vec!["c".to_string()],
            rows: vec![vec!["wide-value".to_string()]],
        };
        assert_eq!(column_width(&ds, 0), 10);
    }
}
