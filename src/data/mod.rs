//! Data reading and representation.
//!
//! This module handles reading the bundled JSON files and representing them
//! as records, datasets and a catalog of site pages.

mod reader;
mod record;
pub mod site;
mod value;

pub use reader::{DataReader, DEFAULT_CATEGORY};
pub use record::{Dataset, Record, YEAR_FIELD};
pub use site::{Category, Page, Selection, Site};
pub use value::{FieldValue, MISSING};
