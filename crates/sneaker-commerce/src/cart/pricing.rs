//! Cart pricing calculations.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart, computed at call time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Per-line-item pricing breakdown, in cart order.
    pub line_items: Vec<LineItemPricing>,
    /// Sum of quantities across lines.
    pub item_count: u64,
    /// Sum of line subtotals.
    pub grand_total: Money,
}

impl CartPricing {
    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.line_items.len()
    }

    /// Check if there is nothing to price.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product name.
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Subtotal (unit_price * quantity).
    pub subtotal: Money,
}
