//! Clipboard integration.

use crate::data::{Record, MISSING};
use crate::error::Result;
use crate::table::Column;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Format a record as `LABEL: value` lines, in column order.
pub fn format_record(record: &Record, columns: &[Column]) -> String {
    let mut text = String::new();
    for column in columns {
        let value = match record.get(&column.key) {
            Some(v) if !v.is_blank() => v.display_string(),
            _ => MISSING.to_string(),
        };
        text.push_str(&format!("{}: {}\n", column.label, value));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::derive_columns;

    #[test]
    fn record_lines_follow_columns() {
        let record = Record::new()
            .with("companyName", "Amazon")
            .with("year", "2024")
            .with("package", "");
        let columns = derive_columns(std::slice::from_ref(&record));
        assert_eq!(
            format_record(&record, &columns),
            "COMPANY NAME: Amazon\nPACKAGE: -\n"
        );
    }
}
