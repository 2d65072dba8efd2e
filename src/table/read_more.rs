//! "Read More" handling for long text cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Content of the read-more modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadMore {
    /// Column label.
    pub title: String,
    /// Full field value.
    pub content: String,
}

/// Modal state: at most one modal is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadMoreModal {
    open: Option<ReadMore>,
    /// Scroll offset inside the modal.
    pub scroll: u16,
}

impl ReadMoreModal {
    /// Open the modal, replacing anything already shown.
    pub fn open(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.open = Some(ReadMore {
            title: title.into(),
            content: content.into(),
        });
        self.scroll = 0;
    }

    /// Close the modal.
    pub fn close(&mut self) {
        self.open = None;
        self.scroll = 0;
    }

    /// The open modal, if any.
    pub fn current(&self) -> Option<&ReadMore> {
        self.open.as_ref()
    }

    /// Whether a modal is open.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Scroll up.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll down.
    pub fn scroll_down(&mut self) {
        if self.open.is_some() {
            self.scroll = self.scroll.saturating_add(1);
        }
    }
}

/// Whether a text exceeds the read-more threshold (in characters).
pub fn needs_read_more(text: &str, threshold: usize) -> bool {
    text.chars().count() > threshold
}

/// Clamp text to a display width, appending an ellipsis when cut.
pub fn clamp(text: &str, max_width: usize) -> String {
    let flat: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.width() <= max_width {
        return flat;
    }
    let mut width = 0;
    let mut out = String::new();
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}
