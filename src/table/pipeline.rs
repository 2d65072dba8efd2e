//! Sort, filter and paginate over a record slice.
//!
//! The stages run in a fixed order: sort the whole dataset, filter by year,
//! filter by search term, then slice out one page. Sorting first means every
//! filtered view keeps the globally chosen order.

use super::date::sort_timestamp;
use crate::data::{FieldValue, Record};
use std::cmp::Ordering;
use std::fmt;

/// Sentinel label for "no year filter".
pub const ALL_YEARS: &str = "All";

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to a sorted header.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The active sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Column key.
    pub key: String,
    /// Direction.
    pub direction: SortDirection,
    /// Compare values as dates.
    pub by_date: bool,
}

impl SortState {
    /// Ascending sort on a column.
    pub fn ascending(key: impl Into<String>, by_date: bool) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
            by_date,
        }
    }

    /// Parse `key` or `key:desc` / `key:asc`.
    pub fn parse(spec: &str) -> Self {
        let (key, direction) = match spec.rsplit_once(':') {
            Some((key, dir)) if dir.eq_ignore_ascii_case("desc") => (key, SortDirection::Descending),
            Some((key, dir)) if dir.eq_ignore_ascii_case("asc") => (key, SortDirection::Ascending),
            _ => (spec, SortDirection::Ascending),
        };
        Self {
            key: key.to_string(),
            direction,
            by_date: super::column::is_date_key(key),
        }
    }
}

/// Year filter: everything, or an exact match on the `year` field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearFilter {
    /// No filtering.
    #[default]
    All,
    /// Keep records whose `year` equals this string.
    Year(String),
}

impl YearFilter {
    /// Parse a user-supplied value; `"All"` maps to the sentinel.
    pub fn parse(value: &str) -> Self {
        if value == ALL_YEARS {
            YearFilter::All
        } else {
            YearFilter::Year(value.to_string())
        }
    }

    /// Whether a record passes the filter.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(year) => record.year().as_deref() == Some(year.as_str()),
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str(ALL_YEARS),
            YearFilter::Year(year) => f.write_str(year),
        }
    }
}

/// Full query over a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Free-text search term.
    pub search: String,
    /// Year filter.
    pub year: YearFilter,
    /// Active sort.
    pub sort: Option<SortState>,
    /// 1-indexed page.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search: String::new(),
            year: YearFilter::All,
            sort: None,
            page: 1,
            page_size: crate::config::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Output of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput<'a> {
    /// Rows of the requested page, in sort order.
    pub rows: Vec<&'a Record>,
    /// Number of records that passed both filters.
    pub total: usize,
}

/// Run every stage.
pub fn run<'a>(records: &'a [Record], query: &Query) -> PipelineOutput<'a> {
    let sorted = sort_records(records, query.sort.as_ref());
    let by_year = filter_by_year(sorted, &query.year);
    let filtered = filter_by_search(by_year, &query.search);
    let rows = paginate(&filtered, query.page, query.page_size).to_vec();
    PipelineOutput {
        rows,
        total: filtered.len(),
    }
}

/// Stable sort of the whole dataset. Without a sort, source order is kept.
pub fn sort_records<'a>(records: &'a [Record], sort: Option<&SortState>) -> Vec<&'a Record> {
    let mut rows: Vec<&Record> = records.iter().collect();
    if let Some(sort) = sort {
        rows.sort_by(|a, b| {
            let ord = compare_records(a, b, sort);
            match sort.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    rows
}

fn compare_records(a: &Record, b: &Record, sort: &SortState) -> Ordering {
    if sort.by_date {
        return sort_timestamp(&a.text(&sort.key)).cmp(&sort_timestamp(&b.text(&sort.key)));
    }
    match (a.get(&sort.key), b.get(&sort.key)) {
        (Some(x), Some(y)) => x.compare(y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Keep records matching the year filter.
pub fn filter_by_year<'a>(rows: Vec<&'a Record>, year: &YearFilter) -> Vec<&'a Record> {
    match year {
        YearFilter::All => rows,
        _ => rows.into_iter().filter(|r| year.matches(r)).collect(),
    }
}

/// Keep records where any field contains the term, ignoring case.
pub fn filter_by_search<'a>(rows: Vec<&'a Record>, term: &str) -> Vec<&'a Record> {
    if term.is_empty() {
        return rows;
    }
    let needle = term.to_lowercase();
    rows.into_iter()
        .filter(|record| matches_search(record, &needle))
        .collect()
}

/// `needle` must already be lower-cased.
fn matches_search(record: &Record, needle: &str) -> bool {
    record
        .values()
        .map(FieldValue::display_string)
        .any(|value| value.to_lowercase().contains(needle))
}

/// Slice out a 1-indexed page. Pages past the end are empty; no clamping.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Number of pages for a row count; an empty result still has one page.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    ((total + page_size - 1) / page_size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FieldValue;

    fn company(name: &str, year: &str) -> Record {
        Record::new().with("name", name).with("year", year)
    }

    fn numbered(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| Record::new().with("sno", FieldValue::from(i as i64)))
            .collect()
    }

    fn names(rows: &[&Record]) -> Vec<String> {
        rows.iter().map(|r| r.text("name")).collect()
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let records = vec![company("Amazon", "2024"), company("Wipro", "2023")];
        let query = Query {
            search: "ama".to_string(),
            ..Query::default()
        };
        let out = run(&records, &query);
        assert_eq!(names(&out.rows), vec!["Amazon"]);
        assert_eq!(out.total, 1);
    }

    #[test]
    fn search_covers_every_field() {
        let records = vec![company("Amazon", "2024"), company("Wipro", "2023")];
        let rows = filter_by_search(records.iter().collect(), "2023");
        assert_eq!(names(&rows), vec!["Wipro"]);
    }

    #[test]
    fn year_filter_is_exact() {
        let records = vec![
            company("Amazon", "2023-24"),
            company("Wipro", "2023"),
            company("TCS", "2023-24"),
        ];
        let rows = filter_by_year(records.iter().collect(), &YearFilter::parse("2023-24"));
        assert_eq!(names(&rows), vec!["Amazon", "TCS"]);

        let rows = filter_by_year(records.iter().collect(), &YearFilter::parse("All"));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = vec![
            company("Amazon", "2024"),
            company("Amdocs", "2023"),
            company("Wipro", "2024"),
        ];
        let year = YearFilter::parse("2024");
        let once = filter_by_search(filter_by_year(records.iter().collect(), &year), "am");
        let twice = filter_by_search(filter_by_year(once.clone(), &year), "am");
        assert_eq!(names(&once), names(&twice));
        assert_eq!(names(&once), vec!["Amazon"]);
    }

    #[test]
    fn pages_cover_filtered_rows_exactly_once() {
        let records = numbered(23);
        let sorted = sort_records(&records, None);
        let pages = total_pages(sorted.len(), 10);
        let mut seen = Vec::new();
        for page in 1..=pages {
            seen.extend(paginate(&sorted, page, 10).iter().map(|r| r.text("sno")));
        }
        let expected: Vec<String> = (1..=23).map(|i| i.to_string()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn sorted_filtered_pages_cover_rows_in_order() {
        let records: Vec<Record> = (1..=40)
            .map(|i| {
                Record::new()
                    .with("name", if i % 3 == 0 { format!("Wipro {i}") } else { format!("Amazon {i}") })
                    .with("eventDate", format!("{:02}-{:02}-2023", (i * 7) % 28 + 1, i % 12 + 1))
                    .with("year", if i % 2 == 0 { "2024" } else { "2023" })
            })
            .collect();
        let sort = SortState {
            key: "eventDate".to_string(),
            direction: SortDirection::Descending,
            by_date: true,
        };
        let mut query = Query {
            search: "amazon".to_string(),
            year: YearFilter::parse("2024"),
            sort: Some(sort.clone()),
            page_size: 4,
            ..Query::default()
        };

        let expected = filter_by_search(
            filter_by_year(sort_records(&records, Some(&sort)), &query.year),
            &query.search,
        );
        let pages = total_pages(expected.len(), query.page_size);
        assert!(pages > 1);

        let mut seen = Vec::new();
        for page in 1..=pages {
            query.page = page;
            seen.extend(run(&records, &query).rows);
        }
        assert_eq!(names(&seen), names(&expected));
    }

    #[test]
    fn last_page_is_partial_and_past_end_is_empty() {
        let records = numbered(25);
        let query = Query {
            page: 3,
            ..Query::default()
        };
        let out = run(&records, &query);
        assert_eq!(out.rows.len(), 5);
        assert_eq!(out.rows[0].text("sno"), "21");
        assert_eq!(out.total, 25);

        let past = Query {
            page: 4,
            ..Query::default()
        };
        assert!(run(&records, &past).rows.is_empty());
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(0, 10), 1);
    }

    #[test]
    fn date_sort_is_stable() {
        let records = vec![
            Record::new().with("name", "b").with("date", "01-02-2024"),
            Record::new().with("name", "a").with("date", "15-01-2024"),
            Record::new().with("name", "c").with("date", "01-02-2024"),
            Record::new().with("name", "x").with("date", "not-a-date"),
        ];
        let asc = sort_records(&records, Some(&SortState::ascending("date", true)));
        assert_eq!(names(&asc), vec!["x", "a", "b", "c"]);

        let desc = SortState {
            direction: SortDirection::Descending,
            ..SortState::ascending("date", true)
        };
        let desc = sort_records(&records, Some(&desc));
        assert_eq!(names(&desc), vec!["b", "c", "a", "x"]);
    }

    #[test]
    fn sort_happens_before_filtering() {
        let records = vec![
            Record::new().with("name", "late").with("date", "2024-12-01").with("year", "2024"),
            Record::new().with("name", "old").with("date", "2020-01-01").with("year", "2020"),
            Record::new().with("name", "early").with("date", "2024-01-01").with("year", "2024"),
        ];
        let query = Query {
            year: YearFilter::parse("2024"),
            sort: Some(SortState::parse("date")),
            ..Query::default()
        };
        assert_eq!(names(&run(&records, &query).rows), vec!["early", "late"]);
    }

    #[test]
    fn text_sort_ignores_case() {
        let records = vec![
            Record::new().with("name", "wipro"),
            Record::new().with("name", "Amazon"),
            Record::new().with("name", "infosys"),
        ];
        let rows = sort_records(&records, Some(&SortState::ascending("name", false)));
        assert_eq!(names(&rows), vec!["Amazon", "infosys", "wipro"]);
    }

    #[test]
    fn pipeline_is_deterministic() {
        let records = vec![company("Amazon", "2024"), company("Wipro", "2023")];
        let query = Query {
            search: "o".to_string(),
            sort: Some(SortState::parse("name:desc")),
            ..Query::default()
        };
        assert_eq!(names(&run(&records, &query).rows), names(&run(&records, &query).rows));
    }

    #[test]
    fn sort_spec_parsing() {
        let sort = SortState::parse("eventDate:desc");
        assert_eq!(sort.key, "eventDate");
        assert_eq!(sort.direction, SortDirection::Descending);
        assert!(sort.by_date);
        assert_eq!(SortState::parse("name").direction, SortDirection::Ascending);
    }
}
