//! Catalog items and the read-only catalog store.

use crate::catalog::{menu, Motif};
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;
use crate::search::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A purchasable menu item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Unique item identifier.
    pub id: ItemId,
    /// Item name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Menu description.
    pub description: String,
    /// Image URL.
    pub image_url: String,
    /// Category the item is listed under.
    pub category: String,
    /// Decorative motif, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motif: Option<Motif>,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        image_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: description.into(),
            image_url: image_url.into(),
            category: category.into(),
            motif: None,
        }
    }

    /// Set the motif.
    pub fn with_motif(mut self, motif: Motif) -> Self {
        self.motif = Some(motif);
        self
    }

    /// Motif to render, falling back to utensils.
    pub fn display_motif(&self) -> Motif {
        self.motif.unwrap_or(Motif::FALLBACK)
    }
}

/// The immutable set of items the menu is browsed over.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique and categories well formed.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CommerceError::DuplicateItemId(item.id.to_string()));
            }
            let category = item.category.trim();
            if category.is_empty() || category == ALL_CATEGORIES {
                return Err(CommerceError::InvalidCategory {
                    item_id: item.id.to_string(),
                    category: item.category.clone(),
                });
            }
            if item.price.is_negative() {
                return Err(CommerceError::NegativePrice {
                    item_id: item.id.to_string(),
                    amount_cents: item.price.amount_cents,
                });
            }
        }
        tracing::debug!(items = items.len(), "catalog loaded");
        Ok(Self { items })
    }

    /// The themed menu shipped with the storefront.
    pub fn builtin() -> Self {
        Self {
            items: menu::builtin_items(),
        }
    }

    /// All items, in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// The items named by `ids`, in that order, each at most once.
    ///
    /// Fails on the first id the catalog does not hold.
    pub fn featured(&self, ids: &[ItemId]) -> Result<Vec<&CatalogItem>, CommerceError> {
        let mut picked: Vec<&CatalogItem> = Vec::with_capacity(ids.len());
        for id in ids {
            let item = self
                .get(id)
                .ok_or_else(|| CommerceError::ItemNotFound(id.to_string()))?;
            if !picked.iter().any(|seen| seen.id == item.id) {
                picked.push(item);
            }
        }
        Ok(picked)
    }

    /// Category tabs: `"All"` followed by each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for item in &self.items {
            if !categories.iter().any(|c| c == &item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
