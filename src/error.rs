//! Error types for Deptview.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Only load-time problems are errors; rendering falls back silently.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Deptview operations.
pub type Result<T> = std::result::Result<T, DeptviewError>;

/// Errors that can occur in Deptview.
#[derive(Debug, Error)]
pub enum DeptviewError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid JSON.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A row of a dataset is not a JSON object.
    #[error("Record {index} in {path} is not an object")]
    InvalidRecord { path: PathBuf, index: usize },

    /// The JSON document has none of the supported shapes.
    #[error("Unsupported data layout in {path}: {reason}")]
    UnsupportedLayout { path: PathBuf, reason: String },

    /// No page with the requested route.
    #[error("Page not found: {route}")]
    UnknownPage { route: String },

    /// No category with the requested key on a page.
    #[error("Category '{key}' not found on page '{route}'")]
    UnknownCategory { route: String, key: String },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

impl DeptviewError {
    /// Create a FileOpen error.
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a Json error.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Create an UnsupportedLayout error.
    pub fn unsupported_layout(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::UnsupportedLayout {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownPage error.
    pub fn unknown_page(route: impl Into<String>) -> Self {
        Self::UnknownPage {
            route: route.into(),
        }
    }

    /// Create an UnknownCategory error.
    pub fn unknown_category(route: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownCategory {
            route: route.into(),
            key: key.into(),
        }
    }
}
