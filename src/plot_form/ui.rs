//! Plot form UI rendering.

use super::{FormField, PlotForm};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const FIELDS: [FormField; 4] = [FormField::X, FormField::Y, FormField::Color, FormField::Kind];

/// Draw the plot form: one row per field, suggestions for the focused field
/// below, and the backend line at the bottom.
pub fn draw_plot_form(
    f: &mut Frame<'_>,
    form: &PlotForm,
    area: Rect,
    colors: &ThemeColors,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(colors.cursor_bg)
    } else {
        Style::default().fg(colors.border)
    };
    let block = Block::default()
        .title(" Plot ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (i, field_id) in FIELDS.iter().enumerate() {
        let field = match field_id {
            FormField::X => &form.x,
            FormField::Y => &form.y,
            FormField::Color => &form.color,
            FormField::Kind => &form.kind,
        };
        let is_active = focused && form.focus == *field_id;

        let label_style = if is_active {
            Style::default()
                .fg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.label)
        };
        let value_style = Style::default().fg(colors.text);

        let mut spans = vec![
            Span::styled(format!("{:<10}", field_id.label()), label_style),
            Span::styled(field.value().to_string(), value_style),
        ];
        if is_active {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(colors.cursor_bg),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), chunks[i]);
    }

    let backend_line = Line::from(vec![
        Span::styled("Backend   ", Style::default().fg(colors.label)),
        Span::styled(form.backend.name(), Style::default().fg(colors.value)),
    ]);
    f.render_widget(Paragraph::new(backend_line), chunks[4]);

    if focused {
        draw_suggestions(f, form, chunks[5], colors);
    }
}

fn draw_suggestions(f: &mut Frame<'_>, form: &PlotForm, area: Rect, colors: &ThemeColors) {
    if area.height == 0 {
        return;
    }

    let field = match form.focus {
        FormField::X => &form.x,
        FormField::Y => &form.y,
        FormField::Color => &form.color,
        FormField::Kind => &form.kind,
    };
    let filtered = field.filtered();
    if filtered.is_empty() {
        return;
    }

    let items: Vec<ListItem<'_>> = filtered
        .iter()
        .take(area.height as usize)
        .enumerate()
        .map(|(idx, suggestion)| {
            let style = if field.selected == Some(idx) {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.value)
            };
            ListItem::new(Line::from(format!("  {suggestion}"))).style(style)
        })
        .collect();

    f.render_widget(List::new(items), area);
}
