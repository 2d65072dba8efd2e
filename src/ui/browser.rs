//! Browser UI rendering.

use super::formatters::format_number;
use super::keymap_bar::draw_keymap;
use super::modal::draw_read_more;
use super::status_bar::draw_status;
use super::table::draw_table;
use super::ThemeColors;
use crate::app::App;
use crate::table::PageView;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

/// Draw the browser UI.
pub(super) fn draw_browser(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let view = app.table.view();

    let has_tabs = !view.categories.is_empty();
    let mut constraints = vec![Constraint::Length(if view.description.is_empty() { 3 } else { 4 })];
    if has_tabs {
        constraints.push(Constraint::Length(1));
    }
    constraints.extend([
        Constraint::Length(1), // Filters
        Constraint::Min(3),    // Table
        Constraint::Length(1), // Pagination
        Constraint::Length(1), // Status
        Constraint::Length(1), // Keymap
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let mut idx = 0;
    draw_header(f, app, &view, chunks[idx], &colors);
    idx += 1;

    if has_tabs {
        draw_tabs(f, &view, chunks[idx], &colors);
        idx += 1;
    }

    draw_filters(f, app, &view, chunks[idx], &colors);
    idx += 1;

    draw_table(f, &view, chunks[idx], &colors);
    idx += 1;

    draw_pagination(f, &view, chunks[idx], &colors);
    idx += 1;

    draw_status(f, chunks[idx], &app.status, &app.search, &colors);
    idx += 1;

    draw_keymap(
        f,
        chunks[idx],
        app.table.read_more.is_open(),
        app.search.is_active(),
        &colors,
    );

    // Overlays
    draw_read_more(f, &app.table.read_more, app.table.config().modal_percent, &colors);
}

fn draw_header(f: &mut Frame<'_>, app: &App, view: &PageView, area: Rect, colors: &ThemeColors) {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            view.title.clone(),
            Style::default()
                .fg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} records", format_number(app.table.data().len())),
            Style::default().fg(colors.gray),
        ),
    ])];
    if !view.description.is_empty() {
        lines.push(Line::from(Span::styled(
            view.description.clone(),
            Style::default().fg(colors.fg0),
        )));
    }

    let title = format!(" {} / {} ", app.site.name, app.current_page().route);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .style(Style::default().bg(colors.bg0)),
        );

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame<'_>, view: &PageView, area: Rect, colors: &ThemeColors) {
    let titles: Vec<Line<'_>> = view
        .categories
        .iter()
        .enumerate()
        .map(|(i, option)| {
            if i < 9 {
                Line::from(format!("{} {}", i + 1, option.label))
            } else {
                Line::from(option.label.clone())
            }
        })
        .collect();
    let selected = view
        .categories
        .iter()
        .position(|c| c.key == view.selected_category)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(colors.gray).bg(colors.bg0))
        .highlight_style(
            Style::default()
                .fg(colors.bg0)
                .bg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    f.render_widget(tabs, area);
}

fn draw_filters(f: &mut Frame<'_>, app: &App, view: &PageView, area: Rect, colors: &ThemeColors) {
    let label = Style::default().fg(colors.gray);
    let active = Style::default().fg(colors.blue).add_modifier(Modifier::BOLD);

    let search = if app.search.is_active() {
        format!("{}▏", app.search.buffer())
    } else if view.search.is_empty() {
        "-".to_string()
    } else {
        view.search.clone()
    };
    let sort = match &app.table.query().sort {
        Some(sort) => format!("{} {}", sort.key, sort.direction.arrow()),
        None => "none".to_string(),
    };
    let columns = if view.hidden_columns > 0 {
        format!("{} shown, {} hidden (e)", view.headers.len(), view.hidden_columns)
    } else if app.table.can_expand() {
        "all (e to collapse)".to_string()
    } else {
        "all".to_string()
    };

    let line = Line::from(vec![
        Span::styled(" Search: ", label),
        Span::styled(search, active),
        Span::styled("  Year: ", label),
        Span::styled(view.year.clone(), active),
        Span::styled("  Sort: ", label),
        Span::styled(sort, active),
        Span::styled("  Columns: ", label),
        Span::styled(columns, Style::default().fg(colors.fg0)),
    ]);

    f.render_widget(Paragraph::new(line).style(Style::default().bg(colors.bg0)), area);
}

fn draw_pagination(f: &mut Frame<'_>, view: &PageView, area: Rect, colors: &ThemeColors) {
    let enabled = Style::default().fg(colors.yellow).add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(colors.bg2);

    let line = Line::from(vec![
        Span::styled(" ◀ Prev ", if view.has_prev() { enabled } else { disabled }),
        Span::styled(format!(" {} ", view.status()), Style::default().fg(colors.fg0)),
        Span::styled(" Next ▶ ", if view.has_next() { enabled } else { disabled }),
    ]);

    f.render_widget(Paragraph::new(line).style(Style::default().bg(colors.bg0)), area);
}
