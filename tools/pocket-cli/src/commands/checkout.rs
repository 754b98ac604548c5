//! Checkout command.

use std::path::Path;

use anyhow::{anyhow, bail, Context as _, Result};
use chrono::{DateTime, Local};
use pocket_commerce::checkout::{CheckoutForm, CheckoutSession, Field, OrderConfirmation};
use pocket_commerce::{CommerceError, ItemId};
use serde::Serialize;

use super::{parse_assignment, CheckoutArgs};
use crate::context::Context;
use crate::output::format_placed_at;

/// Confirmation plus the local time it was issued.
#[derive(Serialize)]
struct ConfirmationView<'a> {
    #[serde(flatten)]
    confirmation: &'a OrderConfirmation,
    placed_at: DateTime<Local>,
}

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    for id in &args.items {
        store
            .add_to_cart(&ItemId::new(id.trim()))
            .with_context(|| format!("Cannot add {id:?} to the cart"))?;
    }

    let form = match &args.form {
        Some(path) => load_form(&ctx.resolve_path(path))?,
        None => CheckoutForm::default(),
    };
    *store.checkout_mut() = CheckoutSession::from_form(form);

    for arg in &args.fields {
        let (name, value) = parse_assignment(arg)?;
        let field: Field = name.parse().map_err(|e: String| anyhow!(e))?;
        store.checkout_mut().set_field(field, value);
    }

    match store.place_order() {
        Ok(confirmation) => {
            render_confirmation(&confirmation, ctx);
            Ok(())
        }
        Err(CommerceError::Validation(errors)) => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "errors": errors }));
            } else {
                ctx.output.header("Checkout");
                for (field, message) in errors.iter() {
                    ctx.output.kv(field.as_str(), message);
                }
            }
            bail!("Checkout form has {} error(s)", errors.len())
        }
        Err(CommerceError::EmptyCart) => {
            bail!("Your cart is empty. Pass --items to order something.")
        }
        Err(e) => Err(e).context("Order was not placed"),
    }
}

/// Read a checkout form from TOML or JSON.
fn load_form(path: &Path) -> Result<CheckoutForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read checkout form: {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON form: {}", path.display()))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML form: {}", path.display()))
    }
}

fn render_confirmation(confirmation: &OrderConfirmation, ctx: &Context) {
    let placed_at = Local::now();

    if ctx.output.is_json() {
        ctx.output.json(&ConfirmationView {
            confirmation,
            placed_at,
        });
        return;
    }

    ctx.output.success("Order placed successfully!");
    ctx.output.header("Order Confirmed!");
    ctx.output.kv("order id", confirmation.order_id.as_str());
    ctx.output.kv("name", &confirmation.customer_name);
    ctx.output.kv("option", confirmation.delivery_option.as_str());
    ctx.output.kv("total", &confirmation.grand_total.display());
    ctx.output.kv("placed", &format_placed_at(placed_at));
    ctx.output.kv("estimated", &confirmation.estimated_time);
    ctx.output.info(&confirmation.items_summary);
    ctx.output.debug(&format!(
        "confirmation view follows after {}ms",
        confirmation.redirect_delay_ms
    ));
}
