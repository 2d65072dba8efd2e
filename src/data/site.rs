//! Site catalog: pages, their category tabs and datasets.
//!
//! A page owns the mapping from category key to dataset. The table only ever
//! sees the selected dataset plus the list of tabs.

use super::Dataset;
use crate::error::{DeptviewError, Result};
use crate::table::{CategoryOption, ColumnSpec, TableProps};

/// One category of a page: a disjoint dataset shown as a tab.
#[derive(Debug, Clone)]
pub struct Category {
    /// Tab label and key.
    pub option: CategoryOption,
    /// Heading override while this category is selected.
    pub title: Option<String>,
    /// Description override while this category is selected.
    pub description: Option<String>,
    /// Records of this category.
    pub dataset: Dataset,
}

impl Category {
    /// Create a category.
    pub fn new(option: CategoryOption, dataset: Dataset) -> Self {
        Self {
            option,
            title: None,
            description: None,
            dataset,
        }
    }

    /// Category key.
    pub fn key(&self) -> &str {
        &self.option.key
    }
}

/// A page of the site, selected by its route key.
#[derive(Debug, Clone)]
pub struct Page {
    /// Route key (e.g. `placements`).
    pub route: String,
    /// Heading.
    pub title: String,
    /// Text under the heading.
    pub description: String,
    /// Whether category tabs are shown.
    pub show_category: bool,
    /// Category selected when the page opens.
    pub default_category: Option<String>,
    /// Categories, at least one.
    pub categories: Vec<Category>,
    /// Explicit column configuration.
    pub columns: Option<Vec<ColumnSpec>>,
}

/// The resolved data for one category of a page.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Category key.
    pub key: String,
    /// Heading to show.
    pub title: String,
    /// Description to show.
    pub description: String,
    /// Records to show.
    pub dataset: Dataset,
}

impl Page {
    /// Find a category by key.
    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key() == key)
    }

    /// Key of the category to show first.
    pub fn initial_category(&self) -> &str {
        self.default_category
            .as_deref()
            .filter(|key| self.category(key).is_some())
            .or_else(|| self.categories.first().map(Category::key))
            .unwrap_or_default()
    }

    /// Resolve a category key to its dataset and display strings.
    pub fn select(&self, key: &str) -> Result<Selection> {
        let category = self
            .category(key)
            .ok_or_else(|| DeptviewError::unknown_category(&self.route, key))?;
        Ok(Selection {
            key: category.key().to_string(),
            title: category.title.clone().unwrap_or_else(|| self.title.clone()),
            description: category
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            dataset: category.dataset.clone(),
        })
    }

    /// Props handed to the table for a selection.
    pub fn table_props(&self, selection: &Selection) -> TableProps {
        TableProps {
            title: selection.title.clone(),
            description: selection.description.clone(),
            show_category: self.show_category,
            categories: self.categories.iter().map(|c| c.option.clone()).collect(),
            selected_category: selection.key.clone(),
            columns: self.columns.clone(),
        }
    }

    /// Total records across categories.
    pub fn record_count(&self) -> usize {
        self.categories.iter().map(|c| c.dataset.len()).sum()
    }
}

/// All pages of a site.
#[derive(Debug, Clone)]
pub struct Site {
    /// Site name.
    pub name: String,
    /// Pages in manifest order.
    pub pages: Vec<Page>,
}

impl Site {
    /// Index of the page with a route.
    pub fn page_index(&self, route: &str) -> Result<usize> {
        self.pages
            .iter()
            .position(|p| p.route == route)
            .ok_or_else(|| DeptviewError::unknown_page(route))
    }

    /// Route keys in order.
    pub fn routes(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.route.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;

    fn page() -> Page {
        let mut research = Category::new(
            CategoryOption::new("Research Projects", "projects"),
            Dataset::new(vec![Record::new().with("title", "Edge AI")]),
        );
        research.title = Some("Funded Projects".to_string());
        Page {
            route: "research".to_string(),
            title: "Research".to_string(),
            description: "Department research".to_string(),
            show_category: true,
            default_category: Some("patents".to_string()),
            categories: vec![
                research,
                Category::new(CategoryOption::bare("patents"), Dataset::empty()),
            ],
            columns: None,
        }
    }

    #[test]
    fn default_category_is_used_when_present() {
        let mut page = page();
        assert_eq!(page.initial_category(), "patents");
        page.default_category = Some("nope".to_string());
        assert_eq!(page.initial_category(), "projects");
    }

    #[test]
    fn selection_overrides_title() {
        let page = page();
        let selection = page.select("projects").unwrap();
        assert_eq!(selection.title, "Funded Projects");
        assert_eq!(selection.description, "Department research");
        assert_eq!(selection.dataset.len(), 1);

        let props = page.table_props(&selection);
        assert_eq!(props.categories.len(), 2);
        assert_eq!(props.selected_category, "projects");
    }

    #[test]
    fn unknown_category_is_an_error() {
        assert!(matches!(
            page().select("awards"),
            Err(DeptviewError::UnknownCategory { .. })
        ));
    }
}
