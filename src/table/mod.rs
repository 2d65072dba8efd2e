//! Tabular data browser.
//!
//! This module contains the browser's pure building blocks (column
//! derivation, date parsing, the sort/filter/paginate pipeline) and the
//! stateful [`TableState`] that wires user actions to them.

pub mod column;
pub mod date;
pub mod pipeline;
pub mod read_more;
pub mod state;
pub mod view;

pub use column::{derive_columns, humanize_label, Column, ColumnSpec, WidthHint};
pub use pipeline::{Query, SortDirection, SortState, YearFilter};
pub use read_more::{ReadMore, ReadMoreModal};
pub use state::{Action, CategoryOption, Effect, TableProps, TableState};
pub use view::{CellView, HeaderView, PageView, RowView, READ_MORE_LABEL};
