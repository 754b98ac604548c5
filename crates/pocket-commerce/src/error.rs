//! Commerce error types.

use crate::checkout::ValidationErrors;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Item not found in the catalog.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Two catalog items share an id.
    #[error("Duplicate item id in catalog: {0}")]
    DuplicateItemId(String),

    /// Blank or reserved category name.
    #[error("Invalid category for item {item_id}: {category:?}")]
    InvalidCategory { item_id: String, category: String },

    /// Negative unit price.
    #[error("Negative price for {item_id}: {amount_cents} cents")]
    NegativePrice { item_id: String, amount_cents: i64 },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout form has field errors.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Configuration value out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
