//! The vending controller built on the engine.
//!
//! States `Stocked`, `Requested`, `Funded` and `OutOfStock`; operations
//! `AddStock`, `RequestItem`, `InsertPayment` and `Dispense`. The transition
//! rules live in [`VendingRules`]; [`VendingMachine`] owns the inventory and
//! exposes the typed operations.

mod error;
mod inventory;
mod machine;
mod operation;
mod state;
mod transition;

pub use error::VendingError;
pub use inventory::Inventory;
pub use machine::VendingMachine;
pub use operation::VendingOperation;
pub use state::VendingState;
pub use transition::VendingRules;
