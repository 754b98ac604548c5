//! Order hand-off after a successful checkout.

use crate::cart::{Cart, CartLine, CartSummary};
use crate::checkout::{CheckoutForm, DeliveryOption};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Default order id prefix.
pub const DEFAULT_ORDER_PREFIX: &str = "DORA";

/// Default delay before the confirmation view is shown.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 3000;

/// Default estimated preparation time.
pub const DEFAULT_ESTIMATED_TIME: &str =
    "Approx. 30-45 minutes (or as fast as the Take-Kopter can fly!)";

/// A form that passed validation, with the cart it pays for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedCheckout {
    pub form: CheckoutForm,
    pub delivery_option: DeliveryOption,
    pub lines: Vec<CartLine>,
    pub summary: CartSummary,
}

impl ValidatedCheckout {
    /// Pair a validated form with a non-empty cart.
    pub(crate) fn new(
        form: CheckoutForm,
        delivery_option: DeliveryOption,
        cart: &Cart,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        Ok(Self {
            form,
            delivery_option,
            lines: cart.lines().to_vec(),
            summary: cart.summary()?,
        })
    }

    pub fn grand_total(&self) -> Money {
        self.summary.grand_total
    }
}

/// What the customer sees once the order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub customer_name: String,
    pub items_summary: String,
    pub estimated_time: String,
    pub delivery_option: DeliveryOption,
    pub grand_total: Money,
    /// Delay before the confirmation view replaces the form. Cosmetic.
    pub redirect_delay_ms: u64,
}

/// The external "place order" action.
pub trait PlaceOrder {
    fn place_order(&self, order: ValidatedCheckout) -> Result<OrderConfirmation, CommerceError>;
}

/// In-memory order placement that confirms every order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoKitchen {
    pub order_prefix: String,
    pub estimated_time: String,
    pub redirect_delay_ms: u64,
}

impl Default for DemoKitchen {
    fn default() -> Self {
        Self {
            order_prefix: DEFAULT_ORDER_PREFIX.to_string(),
            estimated_time: DEFAULT_ESTIMATED_TIME.to_string(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl PlaceOrder for DemoKitchen {
    fn place_order(&self, order: ValidatedCheckout) -> Result<OrderConfirmation, CommerceError> {
        let order_id = OrderId::generate(&self.order_prefix);
        tracing::info!(
            order_id = %order_id,
            lines = order.lines.len(),
            total = %order.grand_total(),
            "order placed"
        );
        Ok(OrderConfirmation {
            order_id,
            customer_name: order.form.full_name.trim().to_string(),
            items_summary: items_summary(&order.lines),
            estimated_time: self.estimated_time.clone(),
            delivery_option: order.delivery_option,
            grand_total: order.grand_total(),
            redirect_delay_ms: self.redirect_delay_ms,
        })
    }
}

/// "Your A, B, and C are being prepared by our Time Kitchen chefs!"
pub fn items_summary(lines: &[CartLine]) -> String {
    let names: Vec<String> = lines
        .iter()
        .map(|line| {
            if line.quantity > 1 {
                format!("{} x{}", line.name, line.quantity)
            } else {
                line.name.clone()
            }
        })
        .collect();

    let joined = match names.as_slice() {
        [] => return "Your order is being prepared by our Time Kitchen chefs!".to_string(),
        [one] => one.clone(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    };
    let verb = if names.len() == 1 { "is" } else { "are" };
    format!("Your {joined} {verb} being prepared by our Time Kitchen chefs!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::AddToCart;
    use crate::money::Currency;

    fn line(name: &str, quantity: i64) -> CartLine {
        CartLine {
            id: name.into(),
            name: name.to_string(),
            price: Money::new(100, Currency::USD),
            image_url: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_items_summary_wording() {
        assert_eq!(
            items_summary(&[line("Dorayaki", 1)]),
            "Your Dorayaki is being prepared by our Time Kitchen chefs!"
        );
        assert_eq!(
            items_summary(&[line("Dorayaki", 2), line("Soda", 1)]),
            "Your Dorayaki x2 and Soda are being prepared by our Time Kitchen chefs!"
        );
        assert_eq!(
            items_summary(&[line("A", 1), line("B", 1), line("C", 1)]),
            "Your A, B, and C are being prepared by our Time Kitchen chefs!"
        );
    }

    #[test]
    fn test_empty_cart_rejected() {
        let result = ValidatedCheckout::new(
            CheckoutForm::default(),
            DeliveryOption::Pickup,
            &Cart::new(),
        );
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }

    #[test]
    fn test_demo_kitchen_confirms() {
        let cart = Cart::new()
            .add_item(AddToCart::new("s1", "Classic Dorayaki", Money::new(350, Currency::USD)))
            .unwrap();
        let form = CheckoutForm {
            full_name: " Shizuka ".to_string(),
            ..CheckoutForm::default()
        };
        let order = ValidatedCheckout::new(form, DeliveryOption::Pickup, &cart).unwrap();

        let confirmation = DemoKitchen::default().place_order(order).unwrap();
        assert_eq!(confirmation.order_id.prefix(), "DORA");
        assert_eq!(confirmation.customer_name, "Shizuka");
        assert_eq!(confirmation.grand_total.amount_cents, 350);
        assert_eq!(confirmation.redirect_delay_ms, 3000);
        assert!(confirmation.items_summary.contains("Classic Dorayaki"));
    }
}
