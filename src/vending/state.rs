//! States of the vending controller.

use crate::state_enum;

state_enum! {
    /// Behavioral mode of a [`VendingMachine`](super::VendingMachine).
    ///
    /// No state is final: every state can be left and re-entered.
    #[derive(Copy, Eq, Hash)]
    pub enum VendingState {
        /// Ready to take a request (stock may still turn out to be empty).
        Stocked,
        /// An item was requested and is awaiting payment.
        Requested,
        /// Payment covers the price; the item is ready to dispense.
        Funded,
        /// Nothing left to sell until stock is added.
        OutOfStock,
    }
}

impl VendingState {
    /// What a caller has to do next to make progress from this state.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::Stocked => "request an item first",
            Self::Requested => "insert payment first",
            Self::Funded => "item dispense in progress",
            Self::OutOfStock => "item out of stock, add stock first",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn four_states_none_final() {
        assert_eq!(VendingState::variants().len(), 4);
        for state in VendingState::variants() {
            assert!(!state.is_final(), "{state} should be re-enterable");
            assert!(!state.is_error());
        }
    }

    #[test]
    fn names_match_variants() {
        assert_eq!(VendingState::OutOfStock.name(), "OutOfStock");
        assert_eq!(VendingState::Funded.to_string(), "Funded");
    }

    #[test]
    fn every_state_has_guidance() {
        for state in VendingState::variants() {
            assert!(!state.guidance().is_empty());
        }
        assert_eq!(VendingState::Requested.guidance(), "insert payment first");
    }
}
