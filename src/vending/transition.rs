//! The vending transition function.
//!
//! One handler per state, each an exhaustive match over the operation set.
//! Guards are `if` clauses on the match arms; nothing here mutates.

use crate::engine::{Behavior, Step};
use crate::vending::error::VendingError;
use crate::vending::inventory::Inventory;
use crate::vending::operation::VendingOperation;
use crate::vending::state::VendingState;

type VendingStep = Step<VendingState, Inventory, VendingError>;

/// Transition rules of the vending controller.
pub struct VendingRules;

impl Behavior for VendingRules {
    type State = VendingState;
    type Operation = VendingOperation;
    type Data = Inventory;
    type Error = VendingError;

    fn step(
        state: &VendingState,
        operation: &VendingOperation,
        inventory: &Inventory,
    ) -> VendingStep {
        match state {
            VendingState::Stocked => stocked(operation, inventory),
            VendingState::Requested => requested(operation, inventory),
            VendingState::Funded => funded(operation, inventory),
            VendingState::OutOfStock => out_of_stock(operation, inventory),
        }
    }
}

fn stocked(operation: &VendingOperation, inventory: &Inventory) -> VendingStep {
    match *operation {
        VendingOperation::AddStock(count) => restock(inventory, count, VendingStep::stay()),
        // Lazily discovered: a machine may sit in Stocked with nothing left.
        VendingOperation::RequestItem if inventory.is_empty() => {
            Step::reject(VendingError::OutOfStock).moving_to(VendingState::OutOfStock)
        }
        VendingOperation::RequestItem => Step::goto(VendingState::Requested),
        VendingOperation::InsertPayment(_) | VendingOperation::Dispense => {
            not_allowed(VendingState::Stocked, operation)
        }
    }
}

fn requested(operation: &VendingOperation, inventory: &Inventory) -> VendingStep {
    match *operation {
        VendingOperation::RequestItem => Step::reject(VendingError::AlreadyRequested),
        VendingOperation::InsertPayment(amount) if inventory.covers(amount) => {
            Step::goto(VendingState::Funded)
        }
        VendingOperation::InsertPayment(amount) => {
            Step::reject(VendingError::InsufficientFunds {
                received: amount,
                required: inventory.unit_price(),
            })
        }
        VendingOperation::AddStock(_) | VendingOperation::Dispense => {
            not_allowed(VendingState::Requested, operation)
        }
    }
}

fn funded(operation: &VendingOperation, inventory: &Inventory) -> VendingStep {
    match *operation {
        VendingOperation::Dispense => match inventory.after_dispense() {
            Some(remaining) if remaining.is_empty() => {
                Step::goto(VendingState::OutOfStock).with_data(remaining)
            }
            Some(remaining) => Step::goto(VendingState::Stocked).with_data(remaining),
            // Unreachable through the public operations: Funded implies stock.
            None => Step::reject(VendingError::OutOfStock).moving_to(VendingState::OutOfStock),
        },
        VendingOperation::AddStock(_)
        | VendingOperation::RequestItem
        | VendingOperation::InsertPayment(_) => not_allowed(VendingState::Funded, operation),
    }
}

fn out_of_stock(operation: &VendingOperation, inventory: &Inventory) -> VendingStep {
    match *operation {
        VendingOperation::AddStock(count) => {
            restock(inventory, count, Step::goto(VendingState::Stocked))
        }
        VendingOperation::RequestItem => Step::reject(VendingError::OutOfStock),
        VendingOperation::InsertPayment(_) | VendingOperation::Dispense => {
            not_allowed(VendingState::OutOfStock, operation)
        }
    }
}

fn restock(inventory: &Inventory, count: u32, accepted: VendingStep) -> VendingStep {
    match inventory.restocked(count) {
        Some(restocked) => accepted.with_data(restocked),
        None => Step::reject(VendingError::StockOverflow {
            stock: inventory.stock_count(),
            added: count,
        }),
    }
}

fn not_allowed(state: VendingState, operation: &VendingOperation) -> VendingStep {
    Step::reject(VendingError::OperationNotAllowed {
        state,
        operation: *operation,
    })
}
