//! Deptview - a terminal browser for department datasets.
//!
//! Deptview loads static JSON (placement records, faculty lists, research
//! output, events) and shows it as a paginated table with free-text search,
//! a year filter, date sorting, category tabs and a "Read More" modal for long
//! text.
//!
//! # Features
//!
//! - Plain arrays, category maps, or multi-page site manifests
//! - Columns derived from the data, or configured per page
//! - Sort, filter, then paginate, ten rows at a time
//! - Vim-style keyboard shortcuts
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use deptview::config::BrowserConfig;
//! use deptview::data::DataReader;
//! use deptview::table::{Action, TableState};
//! use std::path::Path;
//!
//! let site = DataReader::read_file(Path::new("placements.json"))?;
//! let page = &site.pages[0];
//! let selection = page.select(page.initial_category())?;
//!
//! let mut table = TableState::new(BrowserConfig::default());
//! table.mount(page.table_props(&selection), selection.dataset);
//! table.dispatch(Action::SetSearch("amazon".to_string()));
//! println!("{}", table.view().status());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod data;
pub mod error;
pub mod search;
pub mod table;
pub mod ui;

pub use error::{DeptviewError, Result};
