//! JSON data reader.
//!
//! Three layouts are accepted:
//!
//! - an array of records: one page without category tabs,
//! - an object mapping category keys to arrays: one page with tabs,
//! - a site manifest with a `pages` list whose sources resolve relative to
//!   the manifest file.

use super::site::{Category, Page, Site};
use super::{Dataset, Record};
use crate::error::{DeptviewError, Result};
use crate::table::{CategoryOption, ColumnSpec};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key of the single category of a page without tabs.
pub const DEFAULT_CATEGORY: &str = "all";

#[derive(Debug, Deserialize)]
struct SiteManifest {
    #[serde(default)]
    name: Option<String>,
    pages: Vec<PageManifest>,
}

#[derive(Debug, Deserialize)]
struct PageManifest {
    route: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    show_category: Option<bool>,
    #[serde(default)]
    default_category: Option<String>,
    #[serde(default)]
    source: Option<PathBuf>,
    #[serde(default)]
    categories: Vec<CategoryEntry>,
    #[serde(default)]
    columns: Option<Vec<ColumnSpec>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryEntry {
    Bare(String),
    Detailed(CategoryManifest),
}

#[derive(Debug, Deserialize)]
struct CategoryManifest {
    key: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    source: Option<PathBuf>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl CategoryEntry {
    fn key(&self) -> &str {
        match self {
            CategoryEntry::Bare(key) => key,
            CategoryEntry::Detailed(manifest) => &manifest.key,
        }
    }

    fn option(&self) -> CategoryOption {
        match self {
            CategoryEntry::Bare(key) => CategoryOption::bare(key.clone()),
            CategoryEntry::Detailed(manifest) => CategoryOption::new(
                manifest.label.clone().unwrap_or_else(|| manifest.key.clone()),
                manifest.key.clone(),
            ),
        }
    }
}

/// Source document of a page: one array, or arrays keyed by category.
enum PageSource {
    Single(Dataset),
    Keyed(Vec<(String, Dataset)>),
}

/// JSON data reader.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a data file or site manifest.
    pub fn read_file(path: &Path) -> Result<Site> {
        let value = read_json(path)?;
        let is_manifest = matches!(&value, Value::Object(map) if map.contains_key("pages"));
        let site = if is_manifest {
            let manifest: SiteManifest =
                serde_json::from_value(value).map_err(|e| DeptviewError::json(path, e))?;
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            Self::read_manifest(manifest, base, path)?
        } else {
            let route = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "data".to_string());
            let source = page_source(value, path)?;
            Site {
                name: route.clone(),
                pages: vec![page_from_source(&route, source)],
            }
        };

        tracing::info!(
            pages = site.pages.len(),
            records = site.pages.iter().map(Page::record_count).sum::<usize>(),
            "Loaded {}",
            path.display()
        );
        Ok(site)
    }

    fn read_manifest(manifest: SiteManifest, base: &Path, path: &Path) -> Result<Site> {
        if manifest.pages.is_empty() {
            return Err(DeptviewError::unsupported_layout(path, "manifest has no pages"));
        }

        let mut loaded: HashMap<PathBuf, Value> = HashMap::new();
        let mut pages = Vec::with_capacity(manifest.pages.len());
        for page in manifest.pages {
            pages.push(Self::read_page(page, base, &mut loaded)?);
        }

        Ok(Site {
            name: manifest.name.unwrap_or_else(|| "Department".to_string()),
            pages,
        })
    }

    fn read_page(
        manifest: PageManifest,
        base: &Path,
        loaded: &mut HashMap<PathBuf, Value>,
    ) -> Result<Page> {
        let source_doc = match &manifest.source {
            Some(source) => {
                let full = base.join(source);
                let value = load_cached(&full, loaded)?;
                Some((page_source(value, &full)?, full))
            },
            None => None,
        };

        let categories = if manifest.categories.is_empty() {
            match source_doc {
                Some((source, _)) => page_from_source(&manifest.route, source).categories,
                None => {
                    return Err(DeptviewError::unsupported_layout(
                        base.join(&manifest.route),
                        "page has neither a source nor categories",
                    ))
                },
            }
        } else {
            let mut categories = Vec::with_capacity(manifest.categories.len());
            for entry in &manifest.categories {
                let dataset = match entry {
                    CategoryEntry::Detailed(CategoryManifest {
                        source: Some(source),
                        ..
                    }) => {
                        let full = base.join(source);
                        let value = load_cached(&full, loaded)?;
                        match page_source(value, &full)? {
                            PageSource::Single(dataset) => dataset,
                            PageSource::Keyed(_) => {
                                return Err(DeptviewError::unsupported_layout(
                                    full,
                                    "category source must be an array of records",
                                ))
                            },
                        }
                    },
                    _ => keyed_dataset(source_doc.as_ref(), entry.key())
                        .ok_or_else(|| DeptviewError::unknown_category(&manifest.route, entry.key()))?,
                };

                let mut category = Category::new(entry.option(), dataset);
                if let CategoryEntry::Detailed(detail) = entry {
                    category.title = detail.title.clone();
                    category.description = detail.description.clone();
                }
                categories.push(category);
            }
            categories
        };

        let show_category = manifest.show_category.unwrap_or(categories.len() > 1);
        tracing::debug!(route = %manifest.route, categories = categories.len(), "Loaded page");

        Ok(Page {
            title: manifest.title.unwrap_or_else(|| manifest.route.clone()),
            route: manifest.route,
            description: manifest.description,
            show_category,
            default_category: manifest.default_category,
            categories,
            columns: manifest.columns,
        })
    }
}

fn keyed_dataset(source: Option<&(PageSource, PathBuf)>, key: &str) -> Option<Dataset> {
    match source {
        Some((PageSource::Keyed(entries), _)) => entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, dataset)| dataset.clone()),
        Some((PageSource::Single(dataset), _)) if key == DEFAULT_CATEGORY => Some(dataset.clone()),
        _ => None,
    }
}

fn page_from_source(route: &str, source: PageSource) -> Page {
    let (categories, show_category) = match source {
        PageSource::Single(dataset) => (
            vec![Category::new(
                CategoryOption::new("All", DEFAULT_CATEGORY),
                dataset,
            )],
            false,
        ),
        PageSource::Keyed(entries) => (
            entries
                .into_iter()
                .map(|(key, dataset)| Category::new(CategoryOption::bare(key), dataset))
                .collect(),
            true,
        ),
    };

    Page {
        route: route.to_string(),
        title: route.to_string(),
        description: String::new(),
        show_category,
        default_category: None,
        categories,
        columns: None,
    }
}

fn load_cached(path: &Path, loaded: &mut HashMap<PathBuf, Value>) -> Result<Value> {
    if let Some(value) = loaded.get(path) {
        return Ok(value.clone());
    }
    let value = read_json(path)?;
    loaded.insert(path.to_path_buf(), value.clone());
    Ok(value)
}

fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).map_err(|e| DeptviewError::file_open(path, e))?;
    serde_json::from_str(&text).map_err(|e| DeptviewError::json(path, e))
}

fn page_source(value: Value, path: &Path) -> Result<PageSource> {
    match value {
        Value::Array(items) => Ok(PageSource::Single(parse_records(items, path)?)),
        Value::Object(map) => {
            if map.is_empty() || !map.values().all(Value::is_array) {
                return Err(DeptviewError::unsupported_layout(
                    path,
                    "expected an array of records or an object of arrays",
                ));
            }
            keyed_sources(map, path).map(PageSource::Keyed)
        },
        _ => Err(DeptviewError::unsupported_layout(
            path,
            "expected an array of records or an object of arrays",
        )),
    }
}

fn keyed_sources(map: Map<String, Value>, path: &Path) -> Result<Vec<(String, Dataset)>> {
    map.into_iter()
        .map(|(key, value)| match value {
            Value::Array(items) => Ok((key, parse_records(items, path)?)),
            _ => Err(DeptviewError::unsupported_layout(path, "category is not an array")),
        })
        .collect()
}

fn parse_records(items: Vec<Value>, path: &Path) -> Result<Dataset> {
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => records.push(Record::from_json_object(map)),
            _ => {
                return Err(DeptviewError::InvalidRecord {
                    path: path.to_path_buf(),
                    index,
                })
            },
        }
    }
    Ok(Dataset::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_plain_array() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "recruiters.json",
            r#"[{"sno": 1, "name": "Amazon", "year": "2024"}, {"sno": 2, "name": "Wipro", "year": "2023"}]"#,
        );
        let site = DataReader::read_file(&path).unwrap();
        assert_eq!(site.pages.len(), 1);
        let page = &site.pages[0];
        assert_eq!(page.route, "recruiters");
        assert!(!page.show_category);
        assert_eq!(page.categories[0].dataset.len(), 2);
        let keys: Vec<&str> = page.categories[0].dataset.records()[0].keys().collect();
        assert_eq!(keys, vec!["sno", "name", "year"]);
    }

    #[test]
    fn reads_category_object() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "events.json",
            r#"{"workshops": [{"title": "Rust 101"}], "seminars": [{"title": "Ethics"}, {"title": "GPUs"}]}"#,
        );
        let site = DataReader::read_file(&path).unwrap();
        let page = &site.pages[0];
        assert!(page.show_category);
        let keys: Vec<&str> = page.categories.iter().map(Category::key).collect();
        assert_eq!(keys, vec!["workshops", "seminars"]);
        assert_eq!(page.select("seminars").unwrap().dataset.len(), 2);
    }

    #[test]
    fn reads_manifest_with_bare_and_labelled_categories() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "placements.json",
            r#"{"2023-24": [{"name": "Amazon"}], "2022-23": [{"name": "Wipro"}]}"#,
        );
        write(&dir, "faculty.json", r#"[{"name": "Dr. Rao", "designation": "Professor"}]"#);
        let manifest = write(
            &dir,
            "site.json",
            r#"{
                "name": "CSE",
                "pages": [
                    {
                        "route": "placements",
                        "title": "Placement Statistics",
                        "source": "placements.json",
                        "categories": ["2023-24", {"key": "2022-23", "label": "Batch 2022-23", "title": "Older"}],
                        "default_category": "2022-23"
                    },
                    {"route": "faculty", "source": "faculty.json",
                     "columns": [{"key": "name", "label": "FACULTY"}]}
                ]
            }"#,
        );

        let site = DataReader::read_file(&manifest).unwrap();
        assert_eq!(site.name, "CSE");
        assert_eq!(site.routes(), vec!["placements", "faculty"]);

        let placements = &site.pages[0];
        assert!(placements.show_category);
        assert_eq!(placements.initial_category(), "2022-23");
        assert_eq!(placements.categories[0].option.label, "2023-24");
        assert_eq!(placements.categories[1].option.label, "Batch 2022-23");
        assert_eq!(placements.select("2022-23").unwrap().title, "Older");

        let faculty = &site.pages[1];
        assert!(!faculty.show_category);
        assert_eq!(faculty.title, "faculty");
        assert!(faculty.columns.is_some());
    }

    #[test]
    fn category_sources_are_relative_to_manifest() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("research")).unwrap();
        write(&dir, "research/patents.json", r#"[{"title": "Sensor"}]"#);
        let manifest = write(
            &dir,
            "site.json",
            r#"{"pages": [{"route": "research", "categories": [{"key": "patents", "source": "research/patents.json"}]}]}"#,
        );
        let site = DataReader::read_file(&manifest).unwrap();
        assert_eq!(site.pages[0].categories[0].dataset.len(), 1);
        assert!(!site.pages[0].show_category);
    }

    #[test]
    fn rejects_non_object_rows() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.json", r#"[{"a": 1}, 2]"#);
        assert!(matches!(
            DataReader::read_file(&path),
            Err(DeptviewError::InvalidRecord { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_unknown_layout_and_bad_json() {
        let dir = TempDir::new().unwrap();
        let scalar = write(&dir, "scalar.json", "42");
        assert!(matches!(
            DataReader::read_file(&scalar),
            Err(DeptviewError::UnsupportedLayout { .. })
        ));

        let broken = write(&dir, "broken.json", "[{");
        assert!(matches!(DataReader::read_file(&broken), Err(DeptviewError::Json { .. })));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            DataReader::read_file(&missing),
            Err(DeptviewError::FileOpen { .. })
        ));
    }

    #[test]
    fn missing_category_data_is_reported() {
        let dir = TempDir::new().unwrap();
        write(&dir, "events.json", r#"{"workshops": []}"#);
        let manifest = write(
            &dir,
            "site.json",
            r#"{"pages": [{"route": "events", "source": "events.json", "categories": ["workshops", "talks"]}]}"#,
        );
        assert!(matches!(
            DataReader::read_file(&manifest),
            Err(DeptviewError::UnknownCategory { .. })
        ));
    }
}
