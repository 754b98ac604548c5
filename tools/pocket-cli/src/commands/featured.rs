//! House favourites command.

use anyhow::Result;
use pocket_commerce::catalog::CatalogItem;

use super::FeaturedArgs;
use crate::context::Context;
use crate::output::motif_badge;

/// Run the featured command.
pub fn run(args: FeaturedArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let items = take_limit(store.featured(), args.limit);

    if ctx.output.is_json() {
        ctx.output.json(&items);
        return Ok(());
    }

    ctx.output.header("Doraemon's Favorites!");
    if items.is_empty() {
        ctx.output.info("No favourites configured. Set menu.featured to list some.");
        return Ok(());
    }

    let widths = [8, 32, 9, 16];
    for item in &items {
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
    ctx.output.info("See the full menu with `pocket menu`.");

    Ok(())
}

fn take_limit(mut items: Vec<&CatalogItem>, limit: Option<usize>) -> Vec<&CatalogItem> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocket_commerce::{Storefront, StorefrontConfig};

    #[test]
    fn test_take_limit() {
        let store = Storefront::with_builtin_menu(StorefrontConfig::default()).unwrap();
        assert_eq!(take_limit(store.featured(), None).len(), 5);

        let top: Vec<&str> = take_limit(store.featured(), Some(2))
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(top, vec!["s1", "s2"]);
        assert!(take_limit(store.featured(), Some(0)).is_empty());
    }
}
