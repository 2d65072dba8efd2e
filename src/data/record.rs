//! Records and datasets.

use super::FieldValue;
use indexmap::IndexMap;
use std::sync::Arc;

/// Name of the reserved field used by the year filter.
pub const YEAR_FIELD: &str = "year";

/// One row of domain data: an ordered mapping from field name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON object, keeping field order.
    pub fn from_json_object(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            fields: map.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    /// Insert a field, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Get a field value.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Field names in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Field values in source order.
    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.values()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Display string of a field, empty if missing.
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(FieldValue::display_string).unwrap_or_default()
    }

    /// Display string of the reserved `year` field.
    pub fn year(&self) -> Option<String> {
        self.get(YEAR_FIELD).map(FieldValue::display_string)
    }
}

/// An immutable, shared array of records.
///
/// Cloning is cheap and keeps identity: two clones compare equal under
/// [`Dataset::same_as`], while a dataset built from another array does not.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    /// Create a dataset from records.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Arc::from(records),
        }
    }

    /// An empty dataset.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether both handles refer to the same underlying array.
    pub fn same_as(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }

    /// Distinct `year` values, most recent first.
    pub fn years(&self) -> Vec<String> {
        let mut years: Vec<String> = self
            .records
            .iter()
            .filter_map(Record::year)
            .filter(|y| !y.is_empty())
            .collect();
        years.sort_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
