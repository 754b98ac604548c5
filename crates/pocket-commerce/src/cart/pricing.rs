//! Cart totals.

use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Amount due. No tax or delivery fee is charged, so this equals the subtotal.
    pub grand_total: Money,
    /// Sum of quantities.
    pub item_count: i64,
    /// Number of lines.
    pub unique_item_count: usize,
    /// Per-line breakdown.
    pub lines: Vec<LineTotal>,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Subtotal formatted to the currency's decimal places.
    pub fn display_subtotal(&self) -> String {
        self.subtotal.display()
    }

    pub fn display_grand_total(&self) -> String {
        self.grand_total.display()
    }
}

/// Total for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    pub id: ItemId,
    pub unit_price: Money,
    pub quantity: i64,
    /// `unit_price * quantity`.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_display_totals() {
        let summary = CartSummary {
            subtotal: Money::new(1050, Currency::USD),
            grand_total: Money::new(1050, Currency::USD),
            item_count: 3,
            unique_item_count: 1,
            lines: vec![LineTotal {
                id: ItemId::new("x"),
                unit_price: Money::new(350, Currency::USD),
                quantity: 3,
                total: Money::new(1050, Currency::USD),
            }],
        };
        assert_eq!(summary.display_subtotal(), "$10.50");
        assert_eq!(summary.display_grand_total(), "$10.50");
        assert!(!summary.is_empty());
    }
}
