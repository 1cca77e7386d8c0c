//! The vending controller.

use crate::builder::{BuildError, VendingMachineBuilder};
use crate::core::StateHistory;
use crate::engine::Machine;
use crate::vending::error::VendingError;
use crate::vending::inventory::Inventory;
use crate::vending::operation::VendingOperation;
use crate::vending::state::VendingState;
use crate::vending::transition::VendingRules;
use tracing::info;

/// A vending machine: stock, a unit price, and the state that decides what
/// each operation does.
///
/// Each operation either commits fully (data, state and history) or is
/// rejected with a [`VendingError`] and no data change.
///
/// # Example
///
/// ```
/// use vending_fsm::vending::{VendingError, VendingMachine, VendingState};
///
/// let mut machine = VendingMachine::new(1, 10).unwrap();
///
/// machine.request_item().unwrap();
/// assert_eq!(
///     machine.insert_payment(5),
///     Err(VendingError::InsufficientFunds { received: 5, required: 10 })
/// );
/// machine.insert_payment(10).unwrap();
/// machine.dispense().unwrap();
///
/// assert_eq!(machine.stock_count(), 0);
/// assert_eq!(machine.state(), VendingState::OutOfStock);
/// ```
#[derive(Debug)]
pub struct VendingMachine {
    machine: Machine<VendingRules>,
}

impl VendingMachine {
    /// Create a machine in `Stocked` holding `initial_stock` items.
    ///
    /// Fails only when `unit_price` is zero.
    pub fn new(initial_stock: u32, unit_price: u32) -> Result<Self, BuildError> {
        VendingMachineBuilder::new()
            .initial_stock(initial_stock)
            .unit_price(unit_price)
            .build()
    }

    pub fn builder() -> VendingMachineBuilder {
        VendingMachineBuilder::new()
    }

    pub(crate) fn from_machine(machine: Machine<VendingRules>) -> Self {
        Self { machine }
    }

    pub fn add_stock(&mut self, count: u32) -> Result<(), VendingError> {
        self.apply(VendingOperation::AddStock(count))?;
        info!(count, stock = self.stock_count(), "items added");
        Ok(())
    }

    pub fn request_item(&mut self) -> Result<(), VendingError> {
        self.apply(VendingOperation::RequestItem)?;
        info!("item requested");
        Ok(())
    }

    pub fn insert_payment(&mut self, amount: u32) -> Result<(), VendingError> {
        self.apply(VendingOperation::InsertPayment(amount))?;
        info!(amount, "payment received");
        Ok(())
    }

    pub fn dispense(&mut self) -> Result<(), VendingError> {
        self.apply(VendingOperation::Dispense)?;
        info!(remaining = self.stock_count(), "item dispensed");
        Ok(())
    }

    /// Apply any operation; the typed methods above go through here.
    pub fn apply(&mut self, operation: VendingOperation) -> Result<(), VendingError> {
        self.machine.apply(operation)
    }

    pub fn state(&self) -> VendingState {
        *self.machine.current_state()
    }

    pub fn inventory(&self) -> &Inventory {
        self.machine.data()
    }

    pub fn stock_count(&self) -> u32 {
        self.inventory().stock_count()
    }

    pub fn unit_price(&self) -> u32 {
        self.inventory().unit_price()
    }

    pub fn history(&self) -> &StateHistory<VendingState> {
        self.machine.history()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn machine_can_cross_threads() {
        assert_send_sync::<VendingMachine>();
    }

    #[test]
    fn new_starts_stocked() {
        let machine = VendingMachine::new(0, 10).unwrap();
        assert_eq!(machine.state(), VendingState::Stocked);
        assert_eq!(machine.stock_count(), 0);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn new_rejects_zero_price() {
        assert!(VendingMachine::new(1, 0).is_err());
    }

    #[test]
    fn full_purchase_cycle() {
        let mut machine = VendingMachine::new(2, 10).unwrap();

        machine.request_item().unwrap();
        assert_eq!(machine.state(), VendingState::Requested);
        machine.insert_payment(12).unwrap();
        assert_eq!(machine.state(), VendingState::Funded);
        machine.dispense().unwrap();

        assert_eq!(machine.state(), VendingState::Stocked);
        assert_eq!(machine.stock_count(), 1);
        assert_eq!(
            machine.history().get_path(),
            vec![
                &VendingState::Stocked,
                &VendingState::Requested,
                &VendingState::Funded,
                &VendingState::Stocked,
            ]
        );
    }

    #[test]
    fn restock_refused_mid_purchase() {
        let mut machine = VendingMachine::new(1, 10).unwrap();
        machine.request_item().unwrap();

        let result = machine.add_stock(5);

        assert_eq!(
            result,
            Err(VendingError::OperationNotAllowed {
                state: VendingState::Requested,
                operation: VendingOperation::AddStock(5),
            })
        );
        assert_eq!(machine.stock_count(), 1);
        assert_eq!(machine.state(), VendingState::Requested);
    }

    #[test]
    fn history_names_operations() {
        let mut machine = VendingMachine::new(1, 10).unwrap();
        machine.request_item().unwrap();

        let last = machine.history().last().unwrap();
        assert_eq!(last.operation, "request_item");
        assert_eq!(last.from, VendingState::Stocked);
        assert_eq!(last.to, VendingState::Requested);
    }
}
