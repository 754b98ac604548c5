//! Catalog module.
//!
//! Contains the menu item type, the read-only catalog store, and item motifs.

mod item;
mod menu;
mod motif;

pub use item::{Catalog, CatalogItem};
pub use motif::{Motif, MotifInfo};
