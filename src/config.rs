//! Browser configuration.

/// Number of rows shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Long-text values above this many characters get a "Read More" trigger.
pub const DEFAULT_READ_MORE_THRESHOLD: usize = 100;

/// Configuration for the tabular data browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Rows per page.
    pub page_size: usize,
    /// Character count above which long-text cells are clamped.
    pub read_more_threshold: usize,
    /// Display width of a clamped long-text preview.
    pub clamp_width: usize,
    /// Columns shown while the table is collapsed.
    pub collapsed_columns: usize,
    /// Read-more modal size as a percentage of the screen.
    pub modal_percent: u16,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            read_more_threshold: DEFAULT_READ_MORE_THRESHOLD,
            clamp_width: 60,
            collapsed_columns: 6,
            modal_percent: 70,
        }
    }
}

impl BrowserConfig {
    /// Set the page size, keeping it at least one row.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the read-more threshold.
    pub fn with_read_more_threshold(mut self, threshold: usize) -> Self {
        self.read_more_threshold = threshold;
        self
    }
}
