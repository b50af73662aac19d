//! User interface rendering.

mod keymap_bar;
mod status_bar;
mod theme;
mod title_bar;

pub use theme::ThemeColors;

use crate::app::{App, Focus};
use crate::file_browser::ui::draw_file_browser;
use crate::plot::{PlotContent, PLOT_WIDTH};
use crate::plot_form::ui::draw_plot_form;
use crate::table::ui::draw_table;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the file browser panel.
const BROWSER_WIDTH: u16 = 32;
/// Height of the plot form (borders + fields + backend line + suggestions).
const FORM_HEIGHT: u16 = 13;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Title, content, status bar, keymap bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    title_bar::draw_title(f, chunks[0], &app.subtitle(), app.plot_error(), &colors);

    let main = if app.show_tree {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BROWSER_WIDTH), Constraint::Min(1)])
            .split(chunks[1]);
        draw_file_browser(
            f,
            &mut app.file_browser,
            split[0],
            &colors,
            app.focus == Focus::Browser,
        );
        split[1]
    } else {
        chunks[1]
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(PLOT_WIDTH + 2)])
        .split(main);

    draw_table(f, &app.dataset, &app.table, columns[0], &colors);

    let plot_pane = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)])
        .split(columns[1]);

    draw_plot_form(
        f,
        &app.form,
        plot_pane[0],
        &colors,
        app.focus == Focus::Form,
    );
    draw_plot_region(f, app, plot_pane[1], &colors);

    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.focus, &colors);
}

fn draw_plot_region(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let (title, border_color) = match &app.plot {
        PlotContent::Error(_) => (" Chart - ERROR ", colors.error),
        _ => (" Chart ", colors.border),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(border_color)
                .add_modifier(if app.plot.is_error() {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
        )
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.plot {
        PlotContent::Empty => {
            let hint = Paragraph::new(Line::from("Fill the form and press Enter to plot"))
                .style(Style::default().fg(colors.label));
            f.render_widget(hint, inner);
        }
        PlotContent::Chart(text) | PlotContent::Error(text) => {
            f.render_widget(Paragraph::new(text.clone()), inner);
        }
    }
}
