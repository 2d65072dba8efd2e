//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    modal_open: bool,
    search_active: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if modal_open {
        "jk:scroll | c:copy | q/Esc/Enter:close"
    } else if search_active {
        "Type to filter | Enter:keep | Esc:clear"
    } else {
        "q:quit | jk:row | hl:page | /:search | y:year | Tab:category | s/S:sort | e:expand | Enter:read more | [ ]:route | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.gray).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
