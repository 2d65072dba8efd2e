//! Column derivation.
//!
//! Columns come either from an explicit per-page [`ColumnSpec`] list or, when a
//! page does not configure any, from the shape of the first record.

use crate::data::{Record, YEAR_FIELD};
use ratatui::layout::Constraint;
use serde::Deserialize;

/// Width class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthHint {
    /// Serial number.
    Serial,
    /// Dates.
    Date,
    /// Names of people or companies.
    Name,
    /// Titles of papers, events, projects.
    Title,
    /// Long free text (justifications, descriptions).
    Prose,
    /// Short compound references such as volume/issue/page.
    Compact,
    /// Anything else.
    Standard,
}

impl WidthHint {
    /// Layout constraint for this width class.
    pub fn constraint(self) -> Constraint {
        match self {
            WidthHint::Serial => Constraint::Length(6),
            WidthHint::Date => Constraint::Length(12),
            WidthHint::Compact => Constraint::Length(16),
            WidthHint::Name => Constraint::Min(18),
            WidthHint::Standard => Constraint::Min(12),
            WidthHint::Title => Constraint::Fill(2),
            WidthHint::Prose => Constraint::Fill(3),
        }
    }
}

/// Field-name patterns mapped to width classes; the first match wins.
const WIDTH_PATTERNS: &[(&str, WidthHint)] = &[
    ("s.no", WidthHint::Serial),
    ("sno", WidthHint::Serial),
    ("date", WidthHint::Date),
    ("justification", WidthHint::Prose),
    ("description", WidthHint::Prose),
    ("abstract", WidthHint::Prose),
    ("volume", WidthHint::Compact),
    ("title", WidthHint::Title),
    ("name", WidthHint::Name),
    ("company", WidthHint::Name),
    ("author", WidthHint::Name),
];

/// A displayed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Field name in the records.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Width class.
    pub width: WidthHint,
    /// Whether the column can be sorted.
    pub sortable: bool,
    /// Whether long values get a clamped preview and "Read More".
    pub long_text: bool,
}

impl Column {
    /// Build a column for a field name using the naming heuristics.
    pub fn from_key(key: &str) -> Self {
        let width = infer_width(key);
        Self {
            key: key.to_string(),
            label: humanize_label(key),
            width,
            sortable: is_date_key(key),
            long_text: width == WidthHint::Prose,
        }
    }

    /// Whether the column holds dates.
    pub fn is_date(&self) -> bool {
        is_date_key(&self.key)
    }
}

/// Explicit column configuration for a page.
///
/// Any field left out falls back to the heuristic for that key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnSpec {
    /// Field name.
    pub key: String,
    /// Header label.
    #[serde(default)]
    pub label: Option<String>,
    /// Width class.
    #[serde(default)]
    pub width: Option<WidthHint>,
    /// Sortable flag.
    #[serde(default)]
    pub sortable: Option<bool>,
    /// Long-text flag.
    #[serde(default)]
    pub long_text: Option<bool>,
}

impl ColumnSpec {
    /// Resolve into a column.
    pub fn resolve(&self) -> Column {
        let mut column = Column::from_key(&self.key);
        if let Some(label) = &self.label {
            column.label = label.clone();
        }
        if let Some(width) = self.width {
            column.width = width;
            column.long_text = width == WidthHint::Prose;
        }
        if let Some(sortable) = self.sortable {
            column.sortable = sortable;
        }
        if let Some(long_text) = self.long_text {
            column.long_text = long_text;
        }
        column
    }
}

/// Derive columns from the first record.
///
/// The `year` field is never displayed, and serial-number fields move to the
/// front. An empty slice yields no columns.
pub fn derive_columns(records: &[Record]) -> Vec<Column> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let (serial, rest): (Vec<&str>, Vec<&str>) = first
        .keys()
        .filter(|key| *key != YEAR_FIELD)
        .partition(|key| is_serial_key(key));

    serial
        .into_iter()
        .chain(rest)
        .map(Column::from_key)
        .collect()
}

/// Resolve explicit column specs, dropping the reserved `year` field.
pub fn configured_columns(specs: &[ColumnSpec]) -> Vec<Column> {
    specs
        .iter()
        .filter(|spec| spec.key != YEAR_FIELD)
        .map(ColumnSpec::resolve)
        .collect()
}

/// Whether a field name denotes a date.
pub fn is_date_key(key: &str) -> bool {
    key.to_lowercase().contains("date")
}

fn is_serial_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    lower.contains("sno") || lower.contains("s.no")
}

fn infer_width(key: &str) -> WidthHint {
    let lower = key.to_lowercase();
    WIDTH_PATTERNS
        .iter()
        .find(|(pattern, _)| lower.contains(pattern))
        .map(|(_, width)| *width)
        .unwrap_or(WidthHint::Standard)
}

/// Turn a field name into an upper-case header label.
///
/// Acronym-style keys (`SDGS`, `CO_PO`) are kept verbatim. Other keys are
/// split on underscores and camelCase boundaries before upper-casing.
pub fn humanize_label(key: &str) -> String {
    let lower = key.to_lowercase();
    if lower.contains("volume") && lower.contains("issue") && lower.contains("page") {
        return "VOLUME/ISSUE/PAGE".to_string();
    }

    if !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    {
        return key.to_string();
    }

    let mut spaced = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        if c == '_' {
            spaced.push(' ');
        } else {
            if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                spaced.push(' ');
            }
            spaced.push(c);
        }
        prev = Some(c);
    }

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
