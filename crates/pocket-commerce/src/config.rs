//! Storefront settings.
//!
//! Every section and key has a default, so an empty file is a valid config.

use crate::cart::{CartSettings, DuplicateAddPolicy, PLACEHOLDER_IMAGE_URL};
use crate::checkout::{
    DemoKitchen, DEFAULT_ESTIMATED_TIME, DEFAULT_ORDER_PREFIX, DEFAULT_REDIRECT_DELAY_MS,
};
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Items shown per menu page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Built-in menu items shown as the house favourites.
pub const DEFAULT_FEATURED: [&str; 5] = ["s1", "s2", "s3", "d2", "m2"];

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub cart: CartConfig,

    #[serde(default)]
    pub checkout: CheckoutConfig,
}

/// Menu browsing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Item ids for the favourites list, in display order.
    #[serde(default = "default_featured")]
    pub featured: Vec<ItemId>,
}

/// Cart settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    #[serde(default)]
    pub currency: Currency,

    /// "increment" or "ignore"
    #[serde(default)]
    pub duplicate_adds: DuplicateAddPolicy,

    #[serde(default = "default_placeholder_image_url")]
    pub placeholder_image_url: String,
}

/// Order placement settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default = "default_order_prefix")]
    pub order_prefix: String,

    #[serde(default = "default_estimated_time")]
    pub estimated_time: String,

    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_featured() -> Vec<ItemId> {
    DEFAULT_FEATURED.iter().map(|id| ItemId::new(*id)).collect()
}

fn default_placeholder_image_url() -> String {
    PLACEHOLDER_IMAGE_URL.to_string()
}

fn default_order_prefix() -> String {
    DEFAULT_ORDER_PREFIX.to_string()
}

fn default_estimated_time() -> String {
    DEFAULT_ESTIMATED_TIME.to_string()
}

fn default_redirect_delay_ms() -> u64 {
    DEFAULT_REDIRECT_DELAY_MS
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            featured: default_featured(),
        }
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            duplicate_adds: DuplicateAddPolicy::default(),
            placeholder_image_url: default_placeholder_image_url(),
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            order_prefix: default_order_prefix(),
            estimated_time: default_estimated_time(),
            redirect_delay_ms: default_redirect_delay_ms(),
        }
    }
}

impl StorefrontConfig {
    /// Reject values the storefront cannot run with.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.menu.page_size == 0 {
            return Err(CommerceError::InvalidConfig(
                "menu.page_size must be at least 1".to_string(),
            ));
        }
        let prefix = &self.checkout.order_prefix;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CommerceError::InvalidConfig(format!(
                "checkout.order_prefix must be non-empty and alphanumeric, got {prefix:?}"
            )));
        }
        Ok(())
    }

    /// Cart behaviour derived from the `[cart]` section.
    pub fn cart_settings(&self) -> CartSettings {
        CartSettings {
            currency: self.cart.currency,
            duplicate_adds: self.cart.duplicate_adds,
            placeholder_image_url: self.cart.placeholder_image_url.clone(),
        }
    }

    /// Order placement derived from the `[checkout]` section.
    pub fn kitchen(&self) -> DemoKitchen {
        DemoKitchen {
            order_prefix: self.checkout.order_prefix.clone(),
            estimated_time: self.checkout.estimated_time.clone(),
            redirect_delay_ms: self.checkout.redirect_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.menu.page_size, 8);
        assert_eq!(config.menu.featured.len(), 5);
        assert_eq!(config.cart.currency, Currency::USD);
        assert_eq!(config.cart.duplicate_adds, DuplicateAddPolicy::Increment);
        assert_eq!(config.checkout.order_prefix, "DORA");
        assert_eq!(config.checkout.redirect_delay_ms, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: StorefrontConfig =
            serde_json::from_str(r#"{"cart":{"duplicate_adds":"ignore"}}"#).unwrap();
        assert_eq!(config.cart.duplicate_adds, DuplicateAddPolicy::Ignore);
        assert_eq!(config.cart.placeholder_image_url, "/placeholder.svg");
        assert_eq!(config.menu.page_size, 8);
        assert_eq!(config.cart_settings().duplicate_adds, DuplicateAddPolicy::Ignore);
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = StorefrontConfig::default();
        config.menu.page_size = 0;
        assert!(matches!(config.validate(), Err(CommerceError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_bad_prefix() {
        let mut config = StorefrontConfig::default();
        config.checkout.order_prefix = "DO RA".to_string();
        assert!(config.validate().is_err());
        config.checkout.order_prefix = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_kitchen_uses_checkout_section() {
        let mut config = StorefrontConfig::default();
        config.checkout.order_prefix = "POCKET".to_string();
        config.checkout.redirect_delay_ms = 0;
        let kitchen = config.kitchen();
        assert_eq!(kitchen.order_prefix, "POCKET");
        assert_eq!(kitchen.redirect_delay_ms, 0);
    }
}
