//! Application state and logic.
//!
//! The app plays the role of the hosting page: it owns the site catalog,
//! resolves the active route and category to a dataset, and hands that to the
//! table browser.

use crate::clipboard;
use crate::config::BrowserConfig;
use crate::data::{Page, Site};
use crate::error::Result;
use crate::search::SearchInput;
use crate::table::{Action, Effect, TableState};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Help text shown in the status bar.
pub const HELP: &str = "q=quit, j/k=row, h/l=page, /=search, y=year, Tab=category, s=sort, e=expand, Enter=read more, c=copy, [/]=route";

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Loaded site.
    pub site: Site,
    page_index: usize,
    /// Table browser.
    pub table: TableState,
    /// Search input.
    pub search: SearchInput,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create the app showing the first page.
    pub fn new(site: Site, config: BrowserConfig) -> Self {
        let mut app = Self {
            site,
            page_index: 0,
            table: TableState::new(config),
            search: SearchInput::new(),
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
        };
        app.open_page(0);
        app
    }

    /// Currently shown page.
    pub fn current_page(&self) -> &Page {
        &self.site.pages[self.page_index]
    }

    /// Open the page with a route key.
    pub fn open_route(&mut self, route: &str) -> Result<()> {
        let index = self.site.page_index(route)?;
        self.open_page(index);
        Ok(())
    }

    /// Open a page by index, mounting the table on its initial category.
    pub fn open_page(&mut self, index: usize) {
        if index >= self.site.pages.len() {
            return;
        }
        self.page_index = index;
        self.search.cancel();

        let page = &self.site.pages[index];
        match page.select(page.initial_category()) {
            Ok(selection) => {
                let props = page.table_props(&selection);
                self.table.mount(props, selection.dataset);
                self.status = format!("{} loaded", page.title);
                tracing::info!(route = %page.route, category = %selection.key, "Opened page");
            },
            Err(e) => {
                self.status = format!("Error opening page: {}", e);
                tracing::error!("Error opening page: {}", e);
            },
        }
    }

    /// Switch the table to another category of the current page.
    pub fn select_category(&mut self, key: &str) -> Result<()> {
        let selection = self.current_page().select(key)?;
        self.status = format!("Category: {}", selection.title);
        self.table.set_data(
            selection.dataset,
            selection.key,
            selection.title,
            selection.description,
        );
        Ok(())
    }

    /// Forward an action to the table and act on its effect.
    pub fn dispatch(&mut self, action: Action) {
        match self.table.dispatch(action) {
            Effect::None => {},
            Effect::CategoryChanged(key) => {
                if let Err(e) = self.select_category(&key) {
                    self.status = format!("Error: {}", e);
                    tracing::error!("Category switch failed: {}", e);
                }
            },
        }
    }

    /// Open the next page route.
    pub fn next_route(&mut self) {
        let next = (self.page_index + 1) % self.site.pages.len();
        self.open_page(next);
    }

    /// Open the previous page route.
    pub fn prev_route(&mut self) {
        let len = self.site.pages.len();
        self.open_page((self.page_index + len - 1) % len);
    }

    /// Begin editing the search term.
    pub fn start_search(&mut self) {
        let current = self.table.query().search.clone();
        self.search.start(&current);
    }

    /// Type a character into the search.
    pub fn search_input(&mut self, c: char) {
        self.search.input(c);
        self.dispatch(Action::SetSearch(self.search.buffer().to_string()));
    }

    /// Delete the last search character.
    pub fn search_backspace(&mut self) {
        self.search.backspace();
        self.dispatch(Action::SetSearch(self.search.buffer().to_string()));
    }

    /// Keep the typed term and leave search mode.
    pub fn submit_search(&mut self) {
        let term = self.search.submit();
        let total = self.table.view().total_entries;
        self.status = if term.is_empty() {
            "Search cleared".to_string()
        } else {
            format!("{} matches for '{}'", total, term)
        };
    }

    /// Clear the term and leave search mode.
    pub fn cancel_search(&mut self) {
        self.search.cancel();
        self.dispatch(Action::SetSearch(String::new()));
        self.status = "Search cleared".to_string();
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy the modal content, or the selected row, to the clipboard.
    pub fn copy_selection(&mut self) {
        let text = if let Some(modal) = self.table.read_more.current() {
            format!("{}\n\n{}", modal.title, modal.content)
        } else if let Some(record) = self.table.selected_record() {
            clipboard::format_record(record, self.table.columns())
        } else {
            self.status = "No row selected".to_string();
            return;
        };

        match clipboard::copy_to_clipboard(&text) {
            Ok(_) => self.status = "Copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Describe the current sort in the status bar.
    pub fn report_sort(&mut self) {
        self.status = match &self.table.query().sort {
            Some(sort) => format!("Sort: {} {}", sort.key, sort.direction.arrow()),
            None => "Sort: none".to_string(),
        };
    }

    /// Describe the current year filter in the status bar.
    pub fn report_year(&mut self) {
        self.status = format!("Year: {}", self.table.query().year);
    }
}
