//! Operations accepted by the vending controller.

use crate::core::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A caller-invoked vending action.
///
/// Counts and amounts are unsigned, so negative input is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendingOperation {
    /// Add `count` items to the stock.
    AddStock(u32),
    /// Ask for one item.
    RequestItem,
    /// Pay `amount` towards the requested item.
    InsertPayment(u32),
    /// Hand out the paid item.
    Dispense,
}

impl Operation for VendingOperation {
    fn name(&self) -> &str {
        match self {
            Self::AddStock(_) => "add_stock",
            Self::RequestItem => "request_item",
            Self::InsertPayment(_) => "insert_payment",
            Self::Dispense => "dispense",
        }
    }
}

impl fmt::Display for VendingOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddStock(count) => write!(f, "add_stock({count})"),
            Self::InsertPayment(amount) => write!(f, "insert_payment({amount})"),
            Self::RequestItem | Self::Dispense => f.write_str(self.name()),
        }
    }
}
