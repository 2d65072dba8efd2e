//! User interface rendering.

mod browser;
mod formatters;
mod keymap_bar;
mod modal;
mod plain;
mod status_bar;
mod table;
mod theme;

use crate::app::App;
use ratatui::Frame;

pub use formatters::{fit_width, format_number};
pub use plain::render_page;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    browser::draw_browser(f, app);
}
