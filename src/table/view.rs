//! Render model for one page of the table.
//!
//! The view is plain data: the terminal UI and the plain-text printer both
//! draw from it, and tests assert on it without a terminal.

use super::column::Column;
use super::pipeline::{self, total_pages, SortDirection};
use super::read_more::{clamp, needs_read_more};
use super::state::{CategoryOption, TableState};
use crate::data::{FieldValue, Record, MISSING};

/// Text on the read-more trigger.
pub const READ_MORE_LABEL: &str = "Read More";

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    /// Full text.
    Text(String),
    /// Missing, null or empty value.
    Missing,
    /// Long text shown as a preview with a "Read More" trigger.
    Clamped {
        /// Shortened text.
        preview: String,
        /// Complete value.
        full: String,
    },
}

impl CellView {
    fn build(value: Option<&FieldValue>, column: &Column, threshold: usize, width: usize) -> Self {
        match value {
            None => CellView::Missing,
            Some(v) if v.is_blank() => CellView::Missing,
            Some(v) => {
                let text = v.display_string();
                if column.long_text && needs_read_more(&text, threshold) {
                    CellView::Clamped {
                        preview: clamp(&text, width),
                        full: text,
                    }
                } else {
                    CellView::Text(text)
                }
            },
        }
    }

    /// Text shown in the cell.
    pub fn display(&self) -> &str {
        match self {
            CellView::Text(text) => text,
            CellView::Missing => MISSING,
            CellView::Clamped { preview, .. } => preview,
        }
    }

    /// Whether the cell carries a read-more trigger.
    pub fn has_read_more(&self) -> bool {
        matches!(self, CellView::Clamped { .. })
    }
}

/// Header of one visible column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Column definition.
    pub column: Column,
    /// Sort arrow if this column is the sort key.
    pub sort: Option<SortDirection>,
}

impl HeaderView {
    /// Label with sort indicator.
    pub fn text(&self) -> String {
        match self.sort {
            Some(direction) => format!("{} {}", self.column.label, direction.arrow()),
            None if self.column.sortable => format!("{} ↕", self.column.label),
            None => self.column.label.clone(),
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Cells, aligned with the headers.
    pub cells: Vec<CellView>,
    /// Whether the row is under the cursor.
    pub selected: bool,
}

/// Everything needed to draw one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Heading.
    pub title: String,
    /// Text under the heading.
    pub description: String,
    /// Category tabs, empty when hidden.
    pub categories: Vec<CategoryOption>,
    /// Selected category key.
    pub selected_category: String,
    /// Current year filter label.
    pub year: String,
    /// Current search term.
    pub search: String,
    /// Visible column headers.
    pub headers: Vec<HeaderView>,
    /// Columns hidden while collapsed.
    pub hidden_columns: usize,
    /// Rows of the current page.
    pub rows: Vec<RowView>,
    /// 1-indexed current page.
    pub page: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// Rows matching the filters.
    pub total_entries: usize,
}

impl PageView {
    /// Build the view of a table's current state.
    pub fn build(state: &TableState) -> Self {
        let query = state.query();
        let config = state.config();
        let output = pipeline::run(state.data().records(), query);
        let columns = state.visible_columns();

        let headers = columns
            .iter()
            .map(|column| HeaderView {
                column: column.clone(),
                sort: query
                    .sort
                    .as_ref()
                    .filter(|s| s.key == column.key)
                    .map(|s| s.direction),
            })
            .collect();

        let rows = output
            .rows
            .iter()
            .enumerate()
            .map(|(idx, record)| RowView {
                cells: build_cells(record, columns, config.read_more_threshold, config.clamp_width),
                selected: idx == state.cursor(),
            })
            .collect();

        let props = state.props();
        Self {
            title: props.title.clone(),
            description: props.description.clone(),
            categories: if props.show_category {
                props.categories.clone()
            } else {
                Vec::new()
            },
            selected_category: props.selected_category.clone(),
            year: query.year.to_string(),
            search: query.search.clone(),
            headers,
            hidden_columns: state.columns().len() - columns.len(),
            rows,
            page: query.page,
            total_pages: total_pages(output.total, query.page_size),
            total_entries: output.total,
        }
    }

    /// Pagination status line, e.g. `Page 3 of 3 (25 total entries)`.
    pub fn status(&self) -> String {
        format!(
            "Page {} of {} ({} total entries)",
            self.page, self.total_pages, self.total_entries
        )
    }

    /// Whether there is a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether there is a next page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

fn build_cells(record: &Record, columns: &[Column], threshold: usize, width: usize) -> Vec<CellView> {
    columns
        .iter()
        .map(|column| CellView::build(record.get(&column.key), column, threshold, width))
        .collect()
}
