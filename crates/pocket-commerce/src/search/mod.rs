//! Menu query module.
//!
//! Contains the query state, the filter/sort/paginate pipeline, and the
//! owned browser that drives it.

mod browser;
mod pipeline;
mod query;
mod results;

pub use browser::{empty_state_message, MenuBrowser};
pub use pipeline::{
    compare_names, compute_visible_page, filter_and_sort, filter_by_category, filter_by_search,
    paginate, sort_items,
};
pub use query::{normalize_search_term, CategoryFilter, QueryState, SortKey, ALL_CATEGORIES};
pub use results::{total_pages, Pagination, VisiblePage};
