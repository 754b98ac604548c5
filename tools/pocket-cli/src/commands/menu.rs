//! Menu browsing command.

use anyhow::{anyhow, bail, Result};
use pocket_commerce::search::SortKey;

use super::MenuArgs;
use crate::context::Context;
use crate::output::{motif_badge, page_strip};

/// Page numbers shown in the pager strip.
const PAGER_WINDOW: usize = 5;

/// Run the menu command.
pub fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let browser = store.browser_mut();

    if let Some(category) = args.category {
        browser.select_category(category);
    }
    if let Some(term) = args.search {
        browser.search(term);
    }
    if let Some(sort) = args.sort {
        let sort: SortKey = sort.parse().map_err(|e: String| anyhow!(e))?;
        browser.sort_by(sort);
    }
    if args.page != browser.state().page && !browser.go_to_page(args.page) {
        bail!(
            "Page {} is out of range (1-{})",
            args.page,
            browser.total_pages()
        );
    }

    let browser = store.browser();
    let page = browser.visible_page();
    let state = browser.state();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "query": state,
            "pagination": page.pagination,
            "items": page.items,
            "empty_message": browser.empty_state_message(),
        }));
        return Ok(());
    }

    ctx.output.header(&format!(
        "Menu · {} · {}",
        state.active_category,
        state.sort.display_name()
    ));

    if let Some(message) = browser.empty_state_message() {
        ctx.output.info(&message);
        return Ok(());
    }

    let widths = [8, 32, 9, 16];
    for item in &page.items {
        ctx.output.table_row(
            &[
                item.id.as_str(),
                &item.name,
                &item.price.display(),
                &motif_badge(item.display_motif()),
            ],
            &widths,
        );
    }

    let pagination = &page.pagination;
    ctx.output.info(&format!(
        "Showing {}-{} of {} item(s)",
        pagination.start_item(),
        pagination.end_item(),
        pagination.total
    ));
    if pagination.total_pages > 1 {
        ctx.output.kv(
            "pages",
            &page_strip(
                pagination.page,
                &pagination.page_numbers(PAGER_WINDOW),
                pagination.has_prev,
                pagination.has_next,
            ),
        );
    }

    Ok(())
}
