//! Shopping cart module.
//!
//! Contains the cart value, its reducers, and totals.

mod cart;
mod pricing;

pub use cart::{
    AddToCart, Cart, CartAction, CartLine, CartSettings, DuplicateAddPolicy,
    PLACEHOLDER_IMAGE_URL,
};
pub use pricing::{CartSummary, LineTotal};
