//! Errors returned by vending operations.

use crate::vending::operation::VendingOperation;
use crate::vending::state::VendingState;
use thiserror::Error;

/// Why an operation was rejected.
///
/// Every variant is recoverable: the controller is left exactly as it was,
/// apart from the zero-stock detection on `RequestItem`, which moves it to
/// `OutOfStock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VendingError {
    #[error("item out of stock")]
    OutOfStock,

    #[error("item already requested")]
    AlreadyRequested,

    #[error("received [{received}], needed [{required}]")]
    InsufficientFunds { received: u32, required: u32 },

    #[error("{operation} is not allowed while {state}: {}", .state.guidance())]
    OperationNotAllowed {
        state: VendingState,
        operation: VendingOperation,
    },

    #[error("adding {added} items to a stock of {stock} overflows")]
    StockOverflow { stock: u32, added: u32 },
}

impl VendingError {
    /// Next-step hint for the caller, when the rejection came from the
    /// controller's state rather than from the input.
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::OperationNotAllowed { state, .. } => Some(state.guidance()),
            Self::OutOfStock => Some(VendingState::OutOfStock.guidance()),
            Self::AlreadyRequested => Some(VendingState::Requested.guidance()),
            Self::InsufficientFunds { .. } | Self::StockOverflow { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_funds_reports_both_amounts() {
        let error = VendingError::InsufficientFunds {
            received: 5,
            required: 10,
        };
        assert_eq!(error.to_string(), "received [5], needed [10]");
        assert!(error.guidance().is_none());
    }

    #[test]
    fn not_allowed_names_state_and_operation() {
        let error = VendingError::OperationNotAllowed {
            state: VendingState::Stocked,
            operation: VendingOperation::InsertPayment(10),
        };
        assert_eq!(
            error.to_string(),
            "insert_payment(10) is not allowed while Stocked: request an item first"
        );
        assert_eq!(error.guidance(), Some("request an item first"));
    }
}
