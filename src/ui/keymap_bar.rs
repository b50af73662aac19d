//! Keymap help bar UI component.

use crate::app::Focus;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, focus: Focus, colors: &ThemeColors) {
    let keymap_text = match focus {
        Focus::Browser => {
            "jk/↑↓:nav | Enter/l:select | h:parent | JKHL:table | .:hidden | f:files | Tab:form | p:plot | T:theme | q:quit"
        }
        Focus::Form => {
            "type to filter | ↑↓:pick | Tab:next field | Enter:plot | C-t:backend | C-l:clear | C-f:files | Esc:back"
        }
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.status_fg).bg(colors.bg));

    f.render_widget(paragraph, area);
}
