//! The menu pipeline: category filter, search filter, sort, paginate.
//!
//! Every step is a pure narrowing or reordering of borrowed items, so the
//! visible page is a function of the catalog, the query state, and the page
//! size alone.

use crate::catalog::CatalogItem;
use crate::search::{
    normalize_search_term, CategoryFilter, Pagination, QueryState, SortKey, VisiblePage,
};
use std::cmp::Ordering;

/// Compute the page of items to show for `state`.
///
/// A page past the end yields an empty slice with the correct
/// `total_pages`; callers clamp before asking. Page 0 is read as page 1.
///
/// # Panics
/// Panics if `page_size` is zero.
pub fn compute_visible_page<'a>(
    catalog: &'a [CatalogItem],
    state: &QueryState,
    page_size: usize,
) -> VisiblePage<'a> {
    assert!(page_size > 0, "page size must be positive");

    let page = state.page.max(1);
    let matched = filter_and_sort(catalog, state);
    let pagination = Pagination::new(page, page_size, matched.len());
    let items = paginate(&matched, page, page_size).to_vec();

    tracing::debug!(
        category = %state.active_category,
        search = %state.search_term,
        sort = %state.sort,
        page,
        matched = pagination.total,
        shown = items.len(),
        "computed menu page"
    );

    VisiblePage { items, pagination }
}

/// Every item matching `state`, sorted, before pagination.
pub fn filter_and_sort<'a>(catalog: &'a [CatalogItem], state: &QueryState) -> Vec<&'a CatalogItem> {
    let items = catalog.iter().collect();
    let items = filter_by_category(items, &state.active_category);
    let items = filter_by_search(items, &state.search_term);
    sort_items(items, state.sort)
}

/// Keep items in the active category, or all of them for `All`.
pub fn filter_by_category<'a>(
    mut items: Vec<&'a CatalogItem>,
    category: &CategoryFilter,
) -> Vec<&'a CatalogItem> {
    items.retain(|item| category.matches(&item.category));
    items
}

/// Keep items whose name or description contains the term, ignoring case.
///
/// A blank term (after trimming) keeps everything.
pub fn filter_by_search<'a>(mut items: Vec<&'a CatalogItem>, term: &str) -> Vec<&'a CatalogItem> {
    let Some(needle) = normalize_search_term(term) else {
        return items;
    };
    items.retain(|item| {
        item.name.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle)
    });
    items
}

/// Stable sort by the selected key.
pub fn sort_items(mut items: Vec<&CatalogItem>, sort: SortKey) -> Vec<&CatalogItem> {
    match sort {
        SortKey::NameAsc => items.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => items.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortKey::PriceAsc => items.sort_by_key(|item| item.price.amount_cents),
        SortKey::PriceDesc => items.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents)),
    }
    items
}

/// The slice for 1-indexed `page`, empty when the page starts past the end.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    assert!(page_size > 0, "page size must be positive");

    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Case-insensitive name order.
///
/// Names equal up to case fall back to a lowercase-first comparison, so two
/// distinct names never compare equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::money::{Currency, Money};

    fn names<'a>(items: &[&'a CatalogItem]) -> Vec<&'a str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    fn priced(id: &str, name: &str, cents: i64) -> CatalogItem {
        CatalogItem::new(id, name, Money::new(cents, Currency::USD), "", "", "Drinks")
    }

    #[test]
    fn test_category_then_page() {
        let catalog = Catalog::builtin();
        let state = QueryState::new().with_category("Desserts");
        let page = compute_visible_page(catalog.items(), &state, 8);

        assert_eq!(page.total_pages(), 1);
        assert_eq!(
            names(&page.items),
            vec![
                "Shizuka's Sweet Symphony Cake",
                "Small Light Sundae",
                "Translation Jelly Delight",
            ]
        );
    }

    #[test]
    fn test_all_spans_two_pages() {
        let catalog = Catalog::builtin();
        let first = compute_visible_page(catalog.items(), &QueryState::new(), 8);
        assert_eq!(first.len(), 8);
        assert_eq!(first.total_pages(), 2);
        assert_eq!(first.matched(), 13);

        let second = compute_visible_page(catalog.items(), &QueryState::new().with_page(2), 8);
        assert_eq!(second.len(), 5);
    }

    #[test]
    fn test_page_zero_reads_as_first_page() {
        let catalog = Catalog::builtin();
        let state = QueryState {
            page: 0,
            ..QueryState::new()
        };
        let page = compute_visible_page(catalog.items(), &state, 8);
        assert_eq!(page.pagination.page, 1);
        assert!(!page.pagination.has_prev);
        assert!(page.pagination.has_next);
        assert_eq!(page.len(), 8);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let catalog = Catalog::builtin();
        let page = compute_visible_page(catalog.items(), &QueryState::new().with_page(7), 8);
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let catalog = Catalog::builtin();
        let state = QueryState::new().with_search("  DORA ");
        let page = compute_visible_page(catalog.items(), &state, 8);
        assert_eq!(
            names(&page.items),
            vec!["Classic Dorayaki", "Doraemon Blue Sky Soda"]
        );

        // "fruity" only appears in a description.
        let state = QueryState::new().with_search("Fruity");
        let page = compute_visible_page(catalog.items(), &state, 8);
        assert_eq!(names(&page.items), vec!["Translation Jelly Delight"]);
    }

    #[test]
    fn test_search_within_category() {
        let catalog = Catalog::builtin();
        let state = QueryState::new().with_category("Drinks").with_search("dora");
        let page = compute_visible_page(catalog.items(), &state, 8);
        assert_eq!(names(&page.items), vec!["Doraemon Blue Sky Soda"]);
    }

    #[test]
    fn test_no_matches_is_not_an_error() {
        let catalog = Catalog::builtin();
        let state = QueryState::new().with_search("flux capacitor");
        let page = compute_visible_page(catalog.items(), &state, 8);
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_price_sorts() {
        let catalog = Catalog::builtin();
        let state = QueryState::new().with_sort(SortKey::PriceAsc);
        let all = filter_and_sort(catalog.items(), &state);
        assert_eq!(all.first().unwrap().name, "Gulliver Tunnel Gummy");
        assert!(all.windows(2).all(|w| w[0].price.amount_cents <= w[1].price.amount_cents));

        let state = QueryState::new().with_sort(SortKey::PriceDesc);
        let all = filter_and_sort(catalog.items(), &state);
        assert_eq!(all.first().unwrap().name, "Time Machine Pasta");
    }

    #[test]
    fn test_price_sort_is_stable() {
        let items = vec![
            priced("a", "Zebra Cola", 350),
            priced("b", "Apple Fizz", 350),
            priced("c", "Mango Lassi", 100),
        ];
        let asc = sort_items(items.iter().collect(), SortKey::PriceAsc);
        assert_eq!(names(&asc), vec!["Mango Lassi", "Zebra Cola", "Apple Fizz"]);

        let desc = sort_items(items.iter().collect(), SortKey::PriceDesc);
        assert_eq!(names(&desc), vec!["Zebra Cola", "Apple Fizz", "Mango Lassi"]);
    }

    #[test]
    fn test_name_desc_is_reverse_of_asc() {
        let catalog = Catalog::builtin();
        let mut asc = sort_items(catalog.items().iter().collect(), SortKey::NameAsc);
        let desc = sort_items(catalog.items().iter().collect(), SortKey::NameDesc);
        asc.reverse();
        assert_eq!(names(&asc), names(&desc));
    }

    #[test]
    fn test_compare_names_ignores_case() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Banana", "apple"), Ordering::Greater);
        assert_eq!(compare_names("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_names("Apple", "Apple"), Ordering::Equal);
    }

    #[test]
    fn test_paginate_bounds() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(paginate(&data, 1, 2), &[1, 2]);
        assert_eq!(paginate(&data, 3, 2), &[5]);
        assert!(paginate(&data, 4, 2).is_empty());
        assert!(paginate(&data, usize::MAX, 2).is_empty());
    }

    #[test]
    #[should_panic(expected = "page size must be positive")]
    fn test_zero_page_size_is_a_programmer_error() {
        let catalog = Catalog::builtin();
        compute_visible_page(catalog.items(), &QueryState::new(), 0);
    }
}
