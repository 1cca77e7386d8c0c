//! The entity record protected by the vending controller.

use serde::{Deserialize, Serialize};

/// Stock count and unit price.
///
/// Values are only ever replaced wholesale: the arithmetic helpers return a
/// new `Inventory`, or `None` when the result would not fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    stock_count: u32,
    unit_price: u32,
}

impl Inventory {
    pub(crate) fn new(stock_count: u32, unit_price: u32) -> Self {
        Self {
            stock_count,
            unit_price,
        }
    }

    pub fn stock_count(&self) -> u32 {
        self.stock_count
    }

    pub fn unit_price(&self) -> u32 {
        self.unit_price
    }

    pub fn is_empty(&self) -> bool {
        self.stock_count == 0
    }

    /// Whether `amount` pays for one item.
    pub fn covers(&self, amount: u32) -> bool {
        amount >= self.unit_price
    }

    /// Stock increased by `count`, or `None` on overflow.
    pub fn restocked(&self, count: u32) -> Option<Self> {
        let stock_count = self.stock_count.checked_add(count)?;
        Some(Self {
            stock_count,
            ..*self
        })
    }

    /// Stock decreased by one, or `None` when already empty.
    pub fn after_dispense(&self) -> Option<Self> {
        let stock_count = self.stock_count.checked_sub(1)?;
        Some(Self {
            stock_count,
            ..*self
        })
    }
}
