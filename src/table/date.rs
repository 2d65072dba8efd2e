//! Date parsing for sortable date columns.
//!
//! Stored dates come in mixed formats. They are tried in a fixed order and the
//! first format that yields a valid date wins, so `15-03-2024` is the 15th of
//! March and never the 3rd of a fifteenth month.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Numeric formats, tried in order after separators are normalised to `-`.
const NUMERIC_FORMATS: &[&str] = &["%d-%m-%Y", "%m-%d-%Y", "%Y-%m-%d"];

/// Free-form date formats for the generic fallback.
const TEXT_DATE_FORMATS: &[&str] = &["%d %B %Y", "%d %b %Y", "%B %d, %Y", "%b %d, %Y", "%B %d %Y"];

/// Date-time formats for the generic fallback.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a stored date string.
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized: String = trimmed
        .chars()
        .map(|c| if c == '/' || c == '.' { '-' } else { c })
        .collect();

    NUMERIC_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .or_else(|| parse_generic(trimmed))
}

fn parse_generic(input: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Some(dt);
    }
    let cleaned = strip_ordinal_suffixes(input);
    TEXT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `"5th March 2024"` -> `"5 March 2024"`.
fn strip_ordinal_suffixes(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let digits = word.trim_end_matches(|c: char| c.is_ascii_alphabetic());
            let suffix = &word[digits.len()..];
            if !digits.is_empty()
                && digits.chars().all(|c| c.is_ascii_digit())
                && matches!(suffix, "st" | "nd" | "rd" | "th")
            {
                digits.to_string()
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Millisecond timestamp used as a sort key; unparseable dates sort as epoch 0.
pub fn sort_timestamp(input: &str) -> i64 {
    parse_date(input)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}
