//! Field values of a record.

use indexmap::IndexMap;
use serde_json::Value;
use std::cmp::Ordering;

/// Placeholder shown for missing or empty values.
pub const MISSING: &str = "-";

/// A single field value as found in the source JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// JSON null.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer or floating point number.
    Number(serde_json::Number),
    /// Plain text.
    Text(String),
    /// Array of values (e.g. a list of authors).
    List(Vec<FieldValue>),
    /// Nested object.
    Object(IndexMap<String, FieldValue>),
}

impl FieldValue {
    /// String form used for display, search and text comparison.
    ///
    /// Lists are joined with `", "`, objects render as `key: value` pairs
    /// joined with `"; "`. Null renders as an empty string.
    pub fn display_string(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items
                .iter()
                .map(FieldValue::display_string)
                .collect::<Vec<_>>()
                .join(", "),
            FieldValue::Object(map) => map
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v.display_string()))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }

    /// Whether the value should render as the missing placeholder.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Object(map) => map.is_empty(),
            FieldValue::Bool(_) | FieldValue::Number(_) => false,
        }
    }

    /// Numeric view of the value, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Compare two values for sorting.
    ///
    /// Text compares case-insensitively, numbers numerically, and any other
    /// pairing falls back to the display strings.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (FieldValue::Number(_), FieldValue::Number(_)) => {
                match (self.as_f64(), other.as_f64()) {
                    (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                    _ => Ordering::Equal,
                }
            },
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            _ => self
                .display_string()
                .to_lowercase()
                .cmp(&other.display_string().to_lowercase()),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => FieldValue::Number(n),
            Value::String(s) => FieldValue::Text(s),
            Value::Array(items) => FieldValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                FieldValue::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            },
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_joins_lists_and_objects() {
        let list: FieldValue = json!(["Alice", "Bob"]).into();
        assert_eq!(list.display_string(), "Alice, Bob");

        let object: FieldValue = json!({"city": "Pune", "pin": 411001}).into();
        assert_eq!(object.display_string(), "city: Pune; pin: 411001");
    }

    #[test]
    fn integers_display_without_fraction() {
        let n: FieldValue = json!(2024).into();
        assert_eq!(n.display_string(), "2024");
    }

    #[test]
    fn blank_values() {
        assert!(FieldValue::Null.is_blank());
        assert!(FieldValue::from("  ").is_blank());
        assert!(!FieldValue::from(json!(0)).is_blank());
        assert!(!FieldValue::Bool(false).is_blank());
    }

    #[test]
    fn text_compares_case_insensitively() {
        let a = FieldValue::from("amazon");
        let b = FieldValue::from("Wipro");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(
            FieldValue::from("TCS").compare(&FieldValue::from("tcs")),
            Ordering::Equal
        );
    }

    #[test]
    fn numbers_compare_numerically() {
        let small: FieldValue = json!(9).into();
        let large: FieldValue = json!(10).into();
        assert_eq!(small.compare(&large), Ordering::Less);
    }
}
