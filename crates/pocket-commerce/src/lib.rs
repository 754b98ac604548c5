//! Storefront domain types and logic for Pocket Diner.
//!
//! This crate provides the pieces behind a small themed menu shop:
//!
//! - **Catalog**: Menu items, categories, display motifs
//! - **Search**: Category filter, search, sort, and pagination over the menu
//! - **Cart**: Immutable cart values driven by `CartAction`s
//! - **Checkout**: Form validation, checkout session, order hand-off
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_commerce::prelude::*;
//!
//! let mut store = Storefront::with_builtin_menu(StorefrontConfig::default())?;
//!
//! // Browse desserts, cheapest first
//! store.browser_mut().select_category("Desserts");
//! store.browser_mut().sort_by(SortKey::PriceAsc);
//! for item in store.browser().visible_page().items {
//!     println!("{} {}", item.name, item.price);
//! }
//!
//! // Fill the cart
//! store.add_to_cart(&ItemId::new("d1"))?;
//! store.apply(CartAction::SetQuantity { id: ItemId::new("d1"), quantity: 3 })?;
//! println!("Subtotal: {}", store.cart().subtotal()?);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod search;
pub mod storefront;

pub use config::StorefrontConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StorefrontConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{Catalog, CatalogItem, Motif};

    // Search
    pub use crate::search::{
        compute_visible_page, CategoryFilter, MenuBrowser, Pagination, QueryState, SortKey,
        VisiblePage,
    };

    // Cart
    pub use crate::cart::{AddToCart, Cart, CartAction, CartLine, CartSummary};

    // Checkout
    pub use crate::checkout::{
        validate, CheckoutForm, CheckoutSession, DeliveryOption, DemoKitchen, Field,
        OrderConfirmation, PlaceOrder, ValidationErrors,
    };
}
