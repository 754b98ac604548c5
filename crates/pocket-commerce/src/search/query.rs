//! Menu query state: category tab, search text, sort order, and page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the tab that shows every category.
pub const ALL_CATEGORIES: &str = "All";

/// Sort options for the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Sort by name A-Z.
    #[default]
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::PriceAsc => "Price (Low to High)",
            SortKey::PriceDesc => "Price (High to Low)",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| {
                format!(
                    "unknown sort key {s:?} (expected one of name-asc, name-desc, price-asc, price-desc)"
                )
            })
    }
}

/// Which category tab is active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// A single category, matched exactly.
    Named(String),
}

impl CategoryFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Whether an item in `category` passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        if s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(s)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to the menu pipeline.
///
/// Changing the category, search term, or sort order sends the user back
/// to page 1. Only [`QueryState::go_to_page`] and its neighbours move the
/// page, and they ignore requests outside `1..=total_pages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Active category tab.
    pub active_category: CategoryFilter,
    /// Raw search text as typed.
    pub search_term: String,
    /// Sort order.
    pub sort: SortKey,
    /// Current page (1-indexed).
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            active_category: CategoryFilter::All,
            search_term: String::new(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.set_category(category);
        self
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.set_search_term(term);
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.set_sort(sort);
        self
    }

    /// Set the page without range checks; the pipeline returns an empty
    /// slice for pages past the end.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.active_category = category.into();
        self.page = 1;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    /// Move to `page` if it is within `1..=total_pages`.
    ///
    /// Returns whether the request was accepted.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page >= 1 && page <= total_pages {
            self.page = page;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self, total_pages: usize) -> bool {
        self.go_to_page(self.page + 1, total_pages)
    }

    pub fn previous_page(&mut self, total_pages: usize) -> bool {
        self.go_to_page(self.page.saturating_sub(1), total_pages)
    }

    /// Trimmed, lowercased search term, or None when blank.
    pub fn normalized_search(&self) -> Option<String> {
        normalize_search_term(&self.search_term)
    }
}

/// Trim and lowercase a search term; blank terms normalize to None.
pub fn normalize_search_term(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        None
    } else {
        Some(term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_round_trip_strings() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert_eq!(" Price-Desc ".parse::<SortKey>(), Ok(SortKey::PriceDesc));
        assert!("popularity".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_serde_matches_as_str() {
        let json = serde_json::to_string(&SortKey::PriceAsc).unwrap();
        assert_eq!(json, "\"price-asc\"");
    }

    #[test]
    fn test_category_filter_parsing() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("Desserts"),
            CategoryFilter::Named("Desserts".to_string())
        );
        // Only the exact tab name means every category.
        assert!(!CategoryFilter::from("all").is_all());
    }

    #[test]
    fn test_category_filter_serde() {
        let json = serde_json::to_string(&CategoryFilter::All).unwrap();
        assert_eq!(json, "\"All\"");
        let parsed: CategoryFilter = serde_json::from_str("\"Drinks\"").unwrap();
        assert_eq!(parsed, CategoryFilter::Named("Drinks".to_string()));
    }

    #[test]
    fn test_mutations_reset_page() {
        let mut state = QueryState::new().with_page(3);
        state.set_search_term("dora");
        assert_eq!(state.page, 1);

        state.page = 2;
        state.set_category("Drinks");
        assert_eq!(state.page, 1);

        state.page = 2;
        state.set_sort(SortKey::PriceDesc);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_out_of_range_pages_ignored() {
        let mut state = QueryState::new();
        assert!(!state.go_to_page(0, 2));
        assert!(!state.go_to_page(3, 2));
        assert_eq!(state.page, 1);

        assert!(state.next_page(2));
        assert_eq!(state.page, 2);
        assert!(!state.next_page(2));
        assert!(state.previous_page(2));
        assert!(!state.previous_page(2));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_normalized_search() {
        assert_eq!(QueryState::new().with_search("  ").normalized_search(), None);
        assert_eq!(
            QueryState::new().with_search(" DoRa ").normalized_search(),
            Some("dora".to_string())
        );
    }
}
