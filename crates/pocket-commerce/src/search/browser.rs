//! Owned menu browsing state.

use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::search::{compute_visible_page, total_pages, CategoryFilter, QueryState, SortKey, VisiblePage};

/// A catalog plus the query state the user is driving over it.
#[derive(Debug, Clone)]
pub struct MenuBrowser {
    catalog: Catalog,
    state: QueryState,
    page_size: usize,
}

impl MenuBrowser {
    /// Create a browser showing `page_size` items per page.
    pub fn new(catalog: Catalog, page_size: usize) -> Result<Self, CommerceError> {
        if page_size == 0 {
            return Err(CommerceError::InvalidConfig(
                "menu page size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            catalog,
            state: QueryState::default(),
            page_size,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Category tabs for the catalog.
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    pub fn select_category(&mut self, category: impl Into<CategoryFilter>) {
        self.state.set_category(category);
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.state.set_search_term(term);
    }

    pub fn sort_by(&mut self, sort: SortKey) {
        self.state.set_sort(sort);
    }

    /// Jump to a page; out-of-range requests are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let pages = self.total_pages();
        self.state.go_to_page(page, pages)
    }

    pub fn next_page(&mut self) -> bool {
        let pages = self.total_pages();
        self.state.next_page(pages)
    }

    pub fn previous_page(&mut self) -> bool {
        let pages = self.total_pages();
        self.state.previous_page(pages)
    }

    /// Pages in the current filtered list.
    pub fn total_pages(&self) -> usize {
        let matched = crate::search::filter_and_sort(self.catalog.items(), &self.state).len();
        total_pages(matched, self.page_size)
    }

    /// The page currently on screen.
    pub fn visible_page(&self) -> VisiblePage<'_> {
        compute_visible_page(self.catalog.items(), &self.state, self.page_size)
    }

    /// Message to show in place of the grid when nothing matches.
    pub fn empty_state_message(&self) -> Option<String> {
        if !self.visible_page().is_empty() {
            return None;
        }
        Some(empty_state_message(&self.state))
    }
}

/// Empty-state wording for a query with no results.
pub fn empty_state_message(state: &QueryState) -> String {
    let category = &state.active_category;
    if state.normalized_search().is_some() {
        let scope = if category.is_all() {
            String::new()
        } else {
            format!(" in {}", category.as_str().to_lowercase())
        };
        format!("No treats match \"{}\"{}.", state.search_term, scope)
    } else if !category.is_all() {
        format!("No treats currently in {}.", category.as_str().to_lowercase())
    } else {
        "No treats to display.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browser() -> MenuBrowser {
        MenuBrowser::new(Catalog::builtin(), 8).unwrap()
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(matches!(
            MenuBrowser::new(Catalog::builtin(), 0),
            Err(CommerceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_paging_and_reset() {
        let mut browser = browser();
        assert_eq!(browser.total_pages(), 2);
        assert!(browser.next_page());
        assert_eq!(browser.state().page, 2);
        assert_eq!(browser.visible_page().len(), 5);
        assert!(!browser.go_to_page(3));
        assert_eq!(browser.state().page, 2);

        browser.select_category("Desserts");
        assert_eq!(browser.state().page, 1);
        assert_eq!(browser.total_pages(), 1);
        assert!(!browser.next_page());
    }

    #[test]
    fn test_empty_state_messages() {
        let mut browser = browser();
        assert_eq!(browser.empty_state_message(), None);

        browser.search("flux");
        assert_eq!(
            browser.empty_state_message().as_deref(),
            Some("No treats match \"flux\".")
        );

        browser.select_category("Desserts");
        assert_eq!(
            browser.empty_state_message().as_deref(),
            Some("No treats match \"flux\" in desserts.")
        );

        browser.search("");
        browser.select_category("Specials");
        assert_eq!(
            browser.empty_state_message().as_deref(),
            Some("No treats currently in specials.")
        );

        assert_eq!(
            empty_state_message(&QueryState::new()),
            "No treats to display."
        );
    }
}
