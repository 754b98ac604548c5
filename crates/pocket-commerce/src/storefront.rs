//! The storefront: one owner for menu, cart, and checkout state.

use crate::cart::{AddToCart, Cart, CartAction};
use crate::catalog::{Catalog, CatalogItem};
use crate::checkout::{CheckoutSession, OrderConfirmation, PlaceOrder};
use crate::config::StorefrontConfig;
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::search::MenuBrowser;

/// Application state for a single shopper.
#[derive(Debug, Clone)]
pub struct Storefront {
    config: StorefrontConfig,
    browser: MenuBrowser,
    cart: Cart,
    checkout: CheckoutSession,
    last_order: Option<OrderConfirmation>,
}

impl Storefront {
    /// Build a storefront over `catalog`.
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Result<Self, CommerceError> {
        config.validate()?;
        if let Err(CommerceError::ItemNotFound(id)) = catalog.featured(&config.menu.featured) {
            return Err(CommerceError::InvalidConfig(format!(
                "menu.featured names unknown item {id:?}"
            )));
        }
        let browser = MenuBrowser::new(catalog, config.menu.page_size)?;
        let cart = Cart::with_settings(config.cart_settings());
        Ok(Self {
            config,
            browser,
            cart,
            checkout: CheckoutSession::new(),
            last_order: None,
        })
    }

    /// Build a storefront over the built-in menu.
    pub fn with_builtin_menu(config: StorefrontConfig) -> Result<Self, CommerceError> {
        Self::new(config, Catalog::builtin())
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn browser(&self) -> &MenuBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut MenuBrowser {
        &mut self.browser
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn checkout(&self) -> &CheckoutSession {
        &self.checkout
    }

    pub fn checkout_mut(&mut self) -> &mut CheckoutSession {
        &mut self.checkout
    }

    /// The configured favourites, in display order.
    pub fn featured(&self) -> Vec<&CatalogItem> {
        self.browser
            .catalog()
            .featured(&self.config.menu.featured)
            .unwrap_or_default()
    }

    /// The confirmation from the most recent order, if any.
    pub fn last_order(&self) -> Option<&OrderConfirmation> {
        self.last_order.as_ref()
    }

    /// Add a catalog item to the cart by id.
    pub fn add_to_cart(&mut self, id: &ItemId) -> Result<&Cart, CommerceError> {
        let item = self
            .browser
            .catalog()
            .get(id)
            .ok_or_else(|| CommerceError::ItemNotFound(id.to_string()))?;
        let add = AddToCart::new(item.id.clone(), item.name.clone(), item.price)
            .with_image(item.image_url.clone());
        self.apply(CartAction::Add(add))
    }

    /// Run one cart action and keep the resulting cart.
    pub fn apply(&mut self, action: CartAction) -> Result<&Cart, CommerceError> {
        self.cart = self.cart.reduce(action)?;
        Ok(&self.cart)
    }

    /// Submit checkout through the configured kitchen.
    pub fn place_order(&mut self) -> Result<OrderConfirmation, CommerceError> {
        let kitchen = self.config.kitchen();
        self.place_order_with(&kitchen)
    }

    /// Submit checkout through `placer`.
    ///
    /// On success the cart is emptied and the form starts over; on failure
    /// both are left as they were.
    pub fn place_order_with<P: PlaceOrder + ?Sized>(
        &mut self,
        placer: &P,
    ) -> Result<OrderConfirmation, CommerceError> {
        let confirmation = self.checkout.submit(&self.cart, placer)?;
        self.cart = self.cart.clear();
        self.checkout = CheckoutSession::new();
        self.last_order = Some(confirmation.clone());
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{DeliveryOption, Field};

    fn storefront() -> Storefront {
        Storefront::with_builtin_menu(StorefrontConfig::default()).unwrap()
    }

    #[test]
    fn test_add_to_cart_copies_catalog_item() {
        let mut store = storefront();
        store.add_to_cart(&ItemId::new("s1")).unwrap();
        let line = store.cart().get(&ItemId::new("s1")).unwrap();
        assert_eq!(line.name, "Classic Dorayaki");
        assert_eq!(line.quantity, 1);
        assert!(line.image_url.starts_with("https://"));
    }

    #[test]
    fn test_add_unknown_item() {
        let mut store = storefront();
        let result = store.add_to_cart(&ItemId::new("nope"));
        assert!(matches!(result, Err(CommerceError::ItemNotFound(id)) if id == "nope"));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = StorefrontConfig::default();
        config.menu.page_size = 0;
        assert!(Storefront::with_builtin_menu(config).is_err());
    }

    #[test]
    fn test_featured_items() {
        let store = storefront();
        let featured: Vec<&str> = store.featured().iter().map(|item| item.id.as_str()).collect();
        assert_eq!(featured, vec!["s1", "s2", "s3", "d2", "m2"]);

        let mut config = StorefrontConfig::default();
        config.menu.featured = vec![ItemId::new("dr3"), ItemId::new("time-kerchief")];
        let result = Storefront::with_builtin_menu(config);
        assert!(matches!(
            result,
            Err(CommerceError::InvalidConfig(msg)) if msg.contains("time-kerchief")
        ));
    }

    #[test]
    fn test_order_resets_cart_and_form() {
        let mut store = storefront();
        store.add_to_cart(&ItemId::new("m1")).unwrap();
        store.add_to_cart(&ItemId::new("m1")).unwrap();

        let session = store.checkout_mut();
        session.set_field(Field::FullName, "Nobita Nobi");
        session.set_field(Field::Email, "nobita@example.com");
        session.set_delivery_option(DeliveryOption::Pickup);
        session.set_field(Field::CardNumber, "4242424242424242");
        session.set_field(Field::ExpiryDate, "01/30");
        session.set_field(Field::Cvv, "123");
        session.set_terms(true);

        let confirmation = store.place_order().unwrap();
        assert_eq!(confirmation.customer_name, "Nobita Nobi");
        assert!(store.cart().is_empty());
        assert!(store.checkout().form().full_name.is_empty());
        assert_eq!(store.last_order(), Some(&confirmation));
    }

    #[test]
    fn test_failed_order_keeps_state() {
        let mut store = storefront();
        store.add_to_cart(&ItemId::new("d1")).unwrap();
        store.checkout_mut().set_field(Field::FullName, "Gian");

        assert!(store.place_order().is_err());
        assert_eq!(store.cart().unique_item_count(), 1);
        assert_eq!(store.checkout().form().full_name, "Gian");
        assert!(store.last_order().is_none());
    }
}
