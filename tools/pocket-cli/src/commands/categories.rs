//! Category listing command.

use anyhow::Result;
use pocket_commerce::search::{filter_by_category, CategoryFilter};

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let catalog = store.browser().catalog();

    let rows: Vec<(String, usize)> = catalog
        .categories()
        .into_iter()
        .map(|name| {
            let filter = CategoryFilter::from(name.as_str());
            let count = filter_by_category(catalog.items().iter().collect(), &filter).len();
            (name, count)
        })
        .collect();

    if ctx.output.is_json() {
        let json: Vec<_> = rows
            .iter()
            .map(|(name, count)| serde_json::json!({ "name": name, "items": count }))
            .collect();
        ctx.output.json(&json);
        return Ok(());
    }

    ctx.output.header("Categories");
    for (name, count) in &rows {
        if args.counts {
            ctx.output.list_item(&format!("{name} ({count})"));
        } else {
            ctx.output.list_item(name);
        }
    }

    Ok(())
}
