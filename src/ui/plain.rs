//! Plain-text rendering of a page, used by `--print`.

use super::formatters::fit_width;
use crate::table::{CellView, PageView, READ_MORE_LABEL};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " | ";

fn cell_text(cell: &CellView) -> String {
    if cell.has_read_more() {
        format!("{} [{}]", cell.display(), READ_MORE_LABEL)
    } else {
        cell.display().to_string()
    }
}

/// Render a page view as text.
pub fn render_page(view: &PageView) -> String {
    let mut out = String::new();

    out.push_str(&view.title);
    out.push('\n');
    if !view.description.is_empty() {
        out.push_str(&view.description);
        out.push('\n');
    }

    if !view.categories.is_empty() {
        let tabs: Vec<String> = view
            .categories
            .iter()
            .map(|c| {
                if c.key == view.selected_category {
                    format!("[{}]", c.label)
                } else {
                    c.label.clone()
                }
            })
            .collect();
        out.push_str(&format!("Categories: {}\n", tabs.join(" ")));
    }

    let search = if view.search.is_empty() { "-" } else { &view.search };
    out.push_str(&format!("Year: {}  Search: {}\n", view.year, search));
    if view.hidden_columns > 0 {
        out.push_str(&format!("({} more columns hidden)\n", view.hidden_columns));
    }
    out.push('\n');

    if view.rows.is_empty() {
        out.push_str("No records\n");
    } else {
        let rows: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|row| row.cells.iter().map(cell_text).collect())
            .collect();
        let headers: Vec<String> = view.headers.iter().map(|h| h.text()).collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|text| text.width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        out.push_str(&render_line(&headers, &widths));
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');
        for row in &rows {
            out.push_str(&render_line(row, &widths));
        }
    }

    out.push('\n');
    out.push_str(&view.status());
    out.push('\n');
    out
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(text, width)| fit_width(text, *width))
        .collect();
    let mut line = padded.join(SEPARATOR).trim_end().to_string();
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrowserConfig;
    use crate::data::{Dataset, Record};
    use crate::table::{CategoryOption, TableProps, TableState};

    fn view(records: Vec<Record>) -> PageView {
        let mut state = TableState::new(BrowserConfig::default());
        state.mount(
            TableProps {
                title: "Recruiters".to_string(),
                description: "Companies visiting campus".to_string(),
                show_category: true,
                categories: vec![
                    CategoryOption::new("Recruiters", "recruiters"),
                    CategoryOption::new("Statistics", "stats"),
                ],
                selected_category: "recruiters".to_string(),
                columns: None,
            },
            Dataset::new(records),
        );
        state.view()
    }

    #[test]
    fn renders_table_and_status() {
        let text = render_page(&view(vec![
            Record::new().with("name", "Amazon").with("package", "12 LPA"),
            Record::new().with("name", "Wipro"),
        ]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Recruiters");
        assert_eq!(lines[1], "Companies visiting campus");
        assert_eq!(lines[2], "Categories: [Recruiters] Statistics");
        assert_eq!(lines[3], "Year: All  Search: -");
        assert_eq!(lines[5], "NAME   | PACKAGE");
        assert_eq!(lines[6], "-------+--------");
        assert_eq!(lines[7], "Amazon | 12 LPA");
        assert_eq!(lines[8], "Wipro  | -");
        assert!(text.ends_with("Page 1 of 1 (2 total entries)\n"));
    }

    #[test]
    fn long_text_is_marked() {
        let text = render_page(&view(vec![
            Record::new().with("description", "word ".repeat(40)),
        ]));
        assert!(text.contains("[Read More]"));
    }

    #[test]
    fn empty_dataset() {
        let text = render_page(&view(Vec::new()));
        assert!(text.contains("No records"));
        assert!(text.ends_with("Page 1 of 1 (0 total entries)\n"));
    }
}
