//! Cart building command.

use anyhow::{Context as _, Result};
use pocket_commerce::cart::{AddToCart, Cart, CartAction};
use pocket_commerce::ItemId;

use super::{parse_assignment, CartArgs};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    if args.sample {
        for action in sample_actions() {
            store.apply(action)?;
        }
    }

    for id in &args.items {
        store
            .add_to_cart(&ItemId::new(id.as_str()))
            .with_context(|| format!("Cannot add {id:?} to the cart"))?;
        ctx.output.debug(&format!("added {id}"));
    }

    for arg in &args.quantities {
        let (id, quantity) = parse_assignment(arg)?;
        let quantity: i64 = quantity
            .trim()
            .parse()
            .with_context(|| format!("Invalid quantity in {arg:?}"))?;
        store.apply(CartAction::SetQuantity {
            id: ItemId::new(id),
            quantity,
        })?;
    }

    for id in &args.removals {
        store.apply(CartAction::Remove {
            id: ItemId::new(id.as_str()),
        })?;
    }

    render(store.cart(), ctx)
}

/// Actions that rebuild the demo cart line by line.
fn sample_actions() -> Vec<CartAction> {
    Cart::sample()
        .lines()
        .iter()
        .flat_map(|line| {
            [
                CartAction::Add(AddToCart::new(line.id.clone(), line.name.clone(), line.price)),
                CartAction::SetQuantity {
                    id: line.id.clone(),
                    quantity: line.quantity,
                },
            ]
        })
        .collect()
}

fn render(cart: &Cart, ctx: &Context) -> Result<()> {
    let summary = cart.summary()?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "lines": cart.lines(),
            "summary": summary,
        }));
        return Ok(());
    }

    ctx.output.header("Your Cart");
    if summary.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    let widths = [32, 4, 9, 9];
    for (line, total) in cart.lines().iter().zip(&summary.lines) {
        ctx.output.table_row(
            &[
                line.name.as_str(),
                &format!("x{}", line.quantity),
                &line.price.display(),
                &total.total.display(),
            ],
            &widths,
        );
    }

    ctx.output.kv("items", &summary.item_count.to_string());
    ctx.output.kv("subtotal", &summary.display_subtotal());
    ctx.output.kv("total", &summary.display_grand_total());

    Ok(())
}
