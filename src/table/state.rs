//! Stateful table browser.
//!
//! All user input arrives as an [`Action`]. The reducer updates filter, sort,
//! pagination and modal state, and reports category switches back to the
//! owner as an [`Effect`]: the table never maps a category to its data.

use super::column::{configured_columns, derive_columns, Column, ColumnSpec};
use super::pipeline::{self, total_pages, Query, SortState, YearFilter, ALL_YEARS};
use super::read_more::{needs_read_more, ReadMoreModal};
use super::view::PageView;
use crate::config::BrowserConfig;
use crate::data::{Dataset, Record};

/// A category tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Tab label.
    pub label: String,
    /// Key reported on selection.
    pub key: String,
}

impl CategoryOption {
    /// Create a labelled option.
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }

    /// A bare option whose label is its key.
    pub fn bare(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
        }
    }
}

/// Everything the owning page hands to the table besides the records.
#[derive(Debug, Clone, Default)]
pub struct TableProps {
    /// Heading.
    pub title: String,
    /// Text under the heading.
    pub description: String,
    /// Whether category tabs are shown.
    pub show_category: bool,
    /// Category tabs.
    pub categories: Vec<CategoryOption>,
    /// Currently selected category key.
    pub selected_category: String,
    /// Explicit column configuration, if the page has one.
    pub columns: Option<Vec<ColumnSpec>>,
}

/// User intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the search term.
    SetSearch(String),
    /// Replace the year filter.
    SetYear(YearFilter),
    /// Step through the year options.
    CycleYear {
        /// Forward or backward.
        forward: bool,
    },
    /// Select a category tab by key.
    SelectCategory(String),
    /// Select a category tab by position.
    SelectCategoryIndex(usize),
    /// Step through category tabs.
    CycleCategory {
        /// Forward or backward.
        forward: bool,
    },
    /// Sort by a column, or flip direction if it is already the sort key.
    ToggleSort(String),
    /// Move the sort to the next sortable column, then to no sort.
    CycleSort,
    /// Flip the active sort direction.
    FlipSort,
    /// Next page.
    NextPage,
    /// Previous page.
    PrevPage,
    /// First page.
    FirstPage,
    /// Last page.
    LastPage,
    /// Jump to a page (clamped to the valid range).
    GotoPage(usize),
    /// Expand or collapse extra columns.
    ToggleExpanded,
    /// Move the row cursor up.
    CursorUp,
    /// Move the row cursor down.
    CursorDown,
    /// Open the read-more modal for the row under the cursor.
    OpenReadMore,
    /// Close the read-more modal.
    CloseReadMore,
}

/// What the owner must do after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing.
    None,
    /// The user picked another category; the owner should supply its data.
    CategoryChanged(String),
}

/// Columns memoized on dataset identity.
#[derive(Debug, Default)]
struct ColumnCache {
    source: Option<Dataset>,
    columns: Vec<Column>,
    derivations: usize,
}

impl ColumnCache {
    fn refresh(&mut self, data: &Dataset, specs: Option<&[ColumnSpec]>) {
        if self.source.as_ref().is_some_and(|s| s.same_as(data)) {
            return;
        }
        self.columns = match specs {
            Some(specs) if !specs.is_empty() => configured_columns(specs),
            _ => derive_columns(data.records()),
        };
        self.source = Some(data.clone());
        self.derivations += 1;
        tracing::debug!(columns = self.columns.len(), "Derived columns");
    }

    fn invalidate(&mut self) {
        self.source = None;
    }
}

/// Tabular data browser state.
#[derive(Debug)]
pub struct TableState {
    data: Dataset,
    props: TableProps,
    columns: ColumnCache,
    query: Query,
    expanded: bool,
    cursor: usize,
    /// Read-more modal.
    pub read_more: ReadMoreModal,
    config: BrowserConfig,
}

impl TableState {
    /// Create an empty browser.
    pub fn new(config: BrowserConfig) -> Self {
        let query = Query {
            page_size: config.page_size,
            ..Query::default()
        };
        Self {
            data: Dataset::empty(),
            props: TableProps::default(),
            columns: ColumnCache::default(),
            query,
            expanded: false,
            cursor: 0,
            read_more: ReadMoreModal::default(),
            config,
        }
    }

    /// Mount the table for a page: new props, new data, fresh local state.
    pub fn mount(&mut self, props: TableProps, data: Dataset) {
        self.props = props;
        self.query = Query {
            page_size: self.config.page_size,
            ..Query::default()
        };
        self.expanded = false;
        self.cursor = 0;
        self.read_more.close();
        self.columns.invalidate();
        self.data = data;
        self.refresh_columns();
    }

    /// Swap the backing dataset after a category change.
    ///
    /// Page and cursor go back to the start. The year filter and sort survive
    /// only if they still make sense for the new data.
    pub fn set_data(
        &mut self,
        data: Dataset,
        selected_category: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.props.selected_category = selected_category.into();
        self.props.title = title.into();
        self.props.description = description.into();
        self.data = data;
        self.refresh_columns();

        if let YearFilter::Year(year) = &self.query.year {
            if !self.data.years().contains(year) {
                self.query.year = YearFilter::All;
            }
        }
        if let Some(sort) = &self.query.sort {
            if !self.columns.columns.iter().any(|c| c.key == sort.key) {
                self.query.sort = None;
            }
        }
        self.reset_page();
        self.read_more.close();
    }

    fn refresh_columns(&mut self) {
        self.columns.refresh(&self.data, self.props.columns.as_deref());
    }

    fn reset_page(&mut self) {
        self.query.page = 1;
        self.cursor = 0;
    }

    /// Apply an action.
    pub fn dispatch(&mut self, action: Action) -> Effect {
        tracing::debug!(?action, "Table action");
        match action {
            Action::SetSearch(term) => {
                if term != self.query.search {
                    self.query.search = term;
                    self.reset_page();
                }
            },
            Action::SetYear(year) => {
                if year != self.query.year {
                    self.query.year = year;
                    self.reset_page();
                }
            },
            Action::CycleYear { forward } => {
                let options = self.year_options();
                let current = self.query.year.to_string();
                let pos = options.iter().position(|o| *o == current).unwrap_or(0);
                let next = step(pos, options.len(), forward);
                let year = YearFilter::parse(&options[next]);
                return self.dispatch(Action::SetYear(year));
            },
            Action::SelectCategory(key) => {
                if self.props.show_category
                    && key != self.props.selected_category
                    && self.props.categories.iter().any(|c| c.key == key)
                {
                    self.props.selected_category = key.clone();
                    self.reset_page();
                    return Effect::CategoryChanged(key);
                }
            },
            Action::SelectCategoryIndex(index) => {
                if !self.props.show_category {
                    return Effect::None;
                }
                if let Some(option) = self.props.categories.get(index) {
                    let key = option.key.clone();
                    return self.dispatch(Action::SelectCategory(key));
                }
            },
            Action::CycleCategory { forward } => {
                let categories = &self.props.categories;
                if self.props.show_category && categories.len() > 1 {
                    let pos = categories
                        .iter()
                        .position(|c| c.key == self.props.selected_category)
                        .unwrap_or(0);
                    let key = categories[step(pos, categories.len(), forward)].key.clone();
                    return self.dispatch(Action::SelectCategory(key));
                }
            },
            Action::ToggleSort(key) => self.toggle_sort(&key),
            Action::CycleSort => self.cycle_sort(),
            Action::FlipSort => {
                if let Some(sort) = &mut self.query.sort {
                    sort.direction = sort.direction.flip();
                }
            },
            Action::NextPage => self.goto_page(self.query.page.saturating_add(1)),
            Action::PrevPage => self.goto_page(self.query.page.saturating_sub(1)),
            Action::FirstPage => self.goto_page(1),
            Action::LastPage => self.goto_page(self.total_pages()),
            Action::GotoPage(page) => self.goto_page(page),
            Action::ToggleExpanded => self.expanded = !self.expanded,
            Action::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorDown => {
                let len = self.page_len();
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            },
            Action::OpenReadMore => self.open_read_more(self.cursor),
            Action::CloseReadMore => self.read_more.close(),
        }
        Effect::None
    }

    fn toggle_sort(&mut self, key: &str) {
        let Some(column) = self.columns.columns.iter().find(|c| c.key == key) else {
            return;
        };
        if !column.sortable {
            return;
        }
        match &mut self.query.sort {
            Some(sort) if sort.key == key => sort.direction = sort.direction.flip(),
            _ => self.query.sort = Some(SortState::ascending(key, column.is_date())),
        }
    }

    fn cycle_sort(&mut self) {
        let sortable: Vec<&Column> = self.columns.columns.iter().filter(|c| c.sortable).collect();
        let next = match &self.query.sort {
            None => sortable.first(),
            Some(sort) => sortable
                .iter()
                .position(|c| c.key == sort.key)
                .and_then(|pos| sortable.get(pos + 1)),
        };
        self.query.sort = next.map(|c| SortState::ascending(c.key.clone(), c.is_date()));
    }

    fn goto_page(&mut self, page: usize) {
        let page = page.clamp(1, self.total_pages());
        if page != self.query.page {
            self.query.page = page;
            self.cursor = 0;
        }
    }

    fn open_read_more(&mut self, row: usize) {
        let threshold = self.config.read_more_threshold;
        let found = {
            let output = pipeline::run(self.data.records(), &self.query);
            let Some(record) = output.rows.get(row) else {
                return;
            };
            self.visible_columns()
                .iter()
                .filter(|c| c.long_text)
                .map(|c| (c.label.clone(), record.text(&c.key)))
                .find(|(_, text)| needs_read_more(text, threshold))
        };
        if let Some((title, content)) = found {
            self.read_more.open(title, content);
        }
    }

    /// Year options: "All" then the dataset's years, most recent first.
    pub fn year_options(&self) -> Vec<String> {
        std::iter::once(ALL_YEARS.to_string())
            .chain(self.data.years())
            .collect()
    }

    /// Total pages at the current filter state.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_len(), self.query.page_size)
    }

    fn filtered_len(&self) -> usize {
        pipeline::run(self.data.records(), &self.query).total
    }

    fn page_len(&self) -> usize {
        pipeline::run(self.data.records(), &self.query).rows.len()
    }

    /// Render model of the current page.
    pub fn view(&self) -> PageView {
        PageView::build(self)
    }

    /// Record under the cursor.
    pub fn selected_record(&self) -> Option<&Record> {
        pipeline::run(self.data.records(), &self.query)
            .rows
            .get(self.cursor)
            .copied()
    }

    /// All columns, collapsed or not.
    pub fn columns(&self) -> &[Column] {
        &self.columns.columns
    }

    /// Columns currently shown.
    pub fn visible_columns(&self) -> &[Column] {
        let all = self.columns();
        if self.expanded {
            all
        } else {
            &all[..all.len().min(self.config.collapsed_columns)]
        }
    }

    /// Whether some columns are hidden while collapsed.
    pub fn can_expand(&self) -> bool {
        self.columns().len() > self.config.collapsed_columns
    }

    /// Whether all columns are shown.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Current query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Props from the owning page.
    pub fn props(&self) -> &TableProps {
        &self.props
    }

    /// Backing dataset.
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// Row cursor on the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Browser configuration.
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// How many times columns have been derived (memoization check).
    pub fn column_derivations(&self) -> usize {
        self.columns.derivations
    }
}

fn step(pos: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (pos + 1) % len
    } else if pos == 0 {
        len - 1
    } else {
        pos - 1
    }
}
