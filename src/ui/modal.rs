//! Read-more modal overlay.

use super::ThemeColors;
use crate::table::ReadMoreModal;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub(super) fn draw_read_more(
    f: &mut Frame<'_>,
    modal: &ReadMoreModal,
    percent: u16,
    colors: &ThemeColors,
) {
    let Some(content) = modal.current() else {
        return;
    };

    let area = centered_rect(percent, percent, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content.content.as_str())
        .wrap(Wrap { trim: false })
        .scroll((modal.scroll, 0))
        .style(Style::default().fg(colors.fg0))
        .block(
            Block::default()
                .title(format!(" {} ", content.title))
                .title_style(Style::default().fg(colors.yellow))
                .title_bottom(" Esc to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .style(Style::default().bg(colors.bg0)),
        );

    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
