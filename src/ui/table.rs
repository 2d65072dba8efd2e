//! Table grid rendering.

use super::ThemeColors;
use crate::table::pipeline::ALL_YEARS;
use crate::table::{CellView, PageView, READ_MORE_LABEL};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub(super) fn draw_table(f: &mut Frame<'_>, view: &PageView, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));

    if view.rows.is_empty() {
        let message = if view.search.is_empty() && view.year == ALL_YEARS {
            "No records"
        } else {
            "No matching records"
        };
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors.gray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let header_cells: Vec<Cell<'_>> = view
        .headers
        .iter()
        .map(|h| {
            let style = if h.sort.is_some() {
                Style::default().fg(colors.yellow)
            } else {
                Style::default().fg(colors.green)
            };
            Cell::from(h.text()).style(style)
        })
        .collect();

    let rows: Vec<Row<'_>> = view
        .rows
        .iter()
        .map(|row| {
            let cells: Vec<Cell<'_>> = row.cells.iter().map(|cell| draw_cell(cell, colors)).collect();
            let style = if row.selected {
                Style::default()
                    .bg(colors.bg1)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(cells).style(style)
        })
        .collect();

    let widths: Vec<Constraint> = view
        .headers
        .iter()
        .map(|h| h.column.width.constraint())
        .collect();

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD)))
        .column_spacing(2)
        .block(block)
        .style(Style::default().fg(colors.fg0));

    f.render_widget(table, area);
}

fn draw_cell<'a>(cell: &'a CellView, colors: &ThemeColors) -> Cell<'a> {
    match cell {
        CellView::Text(text) => Cell::from(text.as_str()).style(Style::default().fg(colors.aqua)),
        CellView::Missing => Cell::from(cell.display()).style(Style::default().fg(colors.gray)),
        CellView::Clamped { preview, .. } => Cell::from(Line::from(vec![
            Span::styled(preview.as_str(), Style::default().fg(colors.aqua)),
            Span::raw(" "),
            Span::styled(
                READ_MORE_LABEL,
                Style::default()
                    .fg(colors.orange)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ])),
    }
}
