//! Checkout module.
//!
//! Contains the checkout form, its validator, the live session, and the
//! order hand-off.

mod flow;
mod form;
mod order;
mod validate;

pub use flow::CheckoutSession;
pub use form::{CheckoutForm, DeliveryOption, Field};
pub use order::{
    items_summary, DemoKitchen, OrderConfirmation, PlaceOrder, ValidatedCheckout,
    DEFAULT_ESTIMATED_TIME, DEFAULT_ORDER_PREFIX, DEFAULT_REDIRECT_DELAY_MS,
};
pub use validate::{
    is_valid_card_number, is_valid_cvv, is_valid_email, is_valid_expiry, validate,
    ValidationErrors, MIN_NAME_LEN,
};
