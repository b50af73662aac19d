//! Title bar UI component.

use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the title bar: application name plus the subtitle (selected file,
/// or `ERROR` while the plot region shows a diagnostic trace).
pub fn draw_title(
    f: &mut Frame<'_>,
    area: Rect,
    subtitle: &str,
    error: bool,
    colors: &ThemeColors,
) {
    let subtitle_style = if error {
        Style::default()
            .fg(colors.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.label)
    };

    let line = Line::from(vec![
        Span::styled(
            " sirocco ",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("- ", Style::default().fg(colors.border)),
        Span::styled(subtitle.to_string(), subtitle_style),
    ]);

    let paragraph =
        Paragraph::new(line).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
