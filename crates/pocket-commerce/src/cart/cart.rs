//! Cart and cart line types.
//!
//! A `Cart` is a value. Every operation borrows the current cart and returns
//! the next one, so the presentation layer owns exactly one cart and swaps it
//! on each user event.

use crate::cart::{CartSummary, LineTotal};
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Image shown for lines added without one.
pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder.svg";

/// What adding an id that is already in the cart does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateAddPolicy {
    /// Bump the existing line's quantity by one.
    #[default]
    Increment,
    /// Leave the cart unchanged.
    Ignore,
}

/// Cart behaviour knobs, usually taken from config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSettings {
    /// Currency every line must be priced in.
    pub currency: Currency,
    /// Behaviour for a repeated add.
    pub duplicate_adds: DuplicateAddPolicy,
    /// Image for lines added without one.
    pub placeholder_image_url: String,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            duplicate_adds: DuplicateAddPolicy::default(),
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }
}

/// An item being added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddToCart {
    pub id: ItemId,
    pub name: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl AddToCart {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_url: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// One item and its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    /// Unit price.
    pub price: Money,
    pub image_url: String,
    /// Always at least 1 while the line exists.
    pub quantity: i64,
}

impl CartLine {
    /// `price * quantity`, or None on overflow.
    pub fn total(&self) -> Option<Money> {
        self.price.try_multiply(self.quantity)
    }
}

/// A cart event, as dispatched from the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartAction {
    Add(AddToCart),
    SetQuantity { id: ItemId, quantity: i64 },
    Increment { id: ItemId },
    Decrement { id: ItemId },
    Remove { id: ItemId },
    Clear,
}

/// A shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    settings: CartSettings,
}

impl Cart {
    /// An empty cart with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty cart with the given settings.
    pub fn with_settings(settings: CartSettings) -> Self {
        Self {
            lines: Vec::new(),
            settings,
        }
    }

    /// The three-line demo cart.
    pub fn sample() -> Self {
        let usd = |cents| Money::new(cents, Currency::USD);
        let lines = [
            ("dorayaki-01", "Dorayaki Classic Pack (3pcs)", 350, 2),
            ("memorybread-02", "Memory Bread Loaf (Mini)", 475, 1),
            ("anywheredoor-jelly-03", "Anywhere Door Jelly Cup", 225, 3),
        ]
        .into_iter()
        .map(|(id, name, cents, quantity)| CartLine {
            id: ItemId::new(id),
            name: name.to_string(),
            price: usd(cents),
            image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            quantity,
        })
        .collect();

        Self {
            lines,
            settings: CartSettings::default(),
        }
    }

    /// Apply one action and return the next cart.
    pub fn reduce(&self, action: CartAction) -> Result<Cart, CommerceError> {
        match action {
            CartAction::Add(item) => self.add_item(item),
            CartAction::SetQuantity { id, quantity } => Ok(self.set_quantity(&id, quantity)),
            CartAction::Increment { id } => Ok(self.increment(&id)),
            CartAction::Decrement { id } => Ok(self.decrement(&id)),
            CartAction::Remove { id } => Ok(self.remove_item(&id)),
            CartAction::Clear => Ok(self.clear()),
        }
    }

    /// Add an item with quantity 1.
    ///
    /// If the id is already present, the duplicate-add policy decides
    /// between bumping that line and returning the cart unchanged.
    /// Returns an error if the price is negative or in another currency.
    pub fn add_item(&self, item: AddToCart) -> Result<Cart, CommerceError> {
        if item.price.is_negative() {
            return Err(CommerceError::NegativePrice {
                item_id: item.id.to_string(),
                amount_cents: item.price.amount_cents,
            });
        }
        if item.price.currency != self.settings.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.settings.currency.code().to_string(),
                got: item.price.currency.code().to_string(),
            });
        }

        if self.contains(&item.id) {
            tracing::debug!(id = %item.id, policy = ?self.settings.duplicate_adds, "item already in cart");
            return Ok(match self.settings.duplicate_adds {
                DuplicateAddPolicy::Increment => self.increment(&item.id),
                DuplicateAddPolicy::Ignore => self.clone(),
            });
        }

        let mut next = self.clone();
        next.lines.push(CartLine {
            image_url: item
                .image_url
                .unwrap_or_else(|| self.settings.placeholder_image_url.clone()),
            id: item.id,
            name: item.name,
            price: item.price,
            quantity: 1,
        });
        tracing::debug!(lines = next.lines.len(), "added cart line");
        Ok(next)
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Unknown ids leave the
    /// cart as is.
    pub fn set_quantity(&self, id: &ItemId, quantity: i64) -> Cart {
        if quantity <= 0 {
            return self.remove_item(id);
        }
        self.map_line(id, |line| line.quantity = quantity)
    }

    /// Add one to a line's quantity.
    pub fn increment(&self, id: &ItemId) -> Cart {
        self.map_line(id, |line| line.quantity = line.quantity.saturating_add(1))
    }

    /// Take one from a line's quantity; a no-op at 1.
    pub fn decrement(&self, id: &ItemId) -> Cart {
        self.map_line(id, |line| line.quantity = (line.quantity - 1).max(1))
    }

    /// Drop the line with this id.
    pub fn remove_item(&self, id: &ItemId) -> Cart {
        let mut next = self.clone();
        next.lines.retain(|line| &line.id != id);
        next
    }

    /// Drop every line, keeping settings.
    pub fn clear(&self) -> Cart {
        Self::with_settings(self.settings.clone())
    }

    fn map_line(&self, id: &ItemId, f: impl FnOnce(&mut CartLine)) -> Cart {
        let mut next = self.clone();
        if let Some(line) = next.lines.iter_mut().find(|line| &line.id == id) {
            f(line);
        }
        next
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn settings(&self) -> &CartSettings {
        &self.settings
    }

    pub fn currency(&self) -> Currency {
        self.settings.currency
    }

    pub fn get(&self, id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Exact sum of `price * quantity` over all lines.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.lines
            .iter()
            .try_fold(Money::zero(self.currency()), |acc, line| {
                line.total().and_then(|total| acc.try_add(&total))
            })
            .ok_or(CommerceError::Overflow)
    }

    /// Per-line totals and cart totals.
    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                Ok(LineTotal {
                    id: line.id.clone(),
                    unit_price: line.price,
                    quantity: line.quantity,
                    total: line.total().ok_or(CommerceError::Overflow)?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let subtotal = self.subtotal()?;

        Ok(CartSummary {
            subtotal,
            grand_total: subtotal,
            item_count: self.item_count(),
            unique_item_count: self.unique_item_count(),
            lines,
        })
    }
}
