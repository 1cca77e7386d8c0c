//! vending-fsm: a pure functional finite-state machine engine
//!
//! Transition logic is a pure function from `(state, operation, data)` to a
//! [`Step`](engine::Step); a [`Machine`](engine::Machine) owns the state and
//! data and commits each step in one call. The [`vending`] module instantiates
//! the engine as a vending controller.
//!
//! # Core Concepts
//!
//! - **State**: a closed set of modes, via the `State` trait or `state_enum!`
//! - **Behavior**: the transition function, total over every state/operation pair
//! - **History**: in-memory record of committed transitions
//!
//! # Example
//!
//! ```rust
//! use vending_fsm::vending::{VendingError, VendingMachine, VendingState};
//!
//! let mut machine = VendingMachine::new(0, 10).unwrap();
//!
//! assert_eq!(machine.request_item(), Err(VendingError::OutOfStock));
//! assert_eq!(machine.state(), VendingState::OutOfStock);
//!
//! machine.add_stock(2).unwrap();
//! assert_eq!(machine.state(), VendingState::Stocked);
//! assert_eq!(machine.stock_count(), 2);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod vending;

// Re-export commonly used types
pub use builder::{BuildError, InitialStatePolicy, VendingMachineBuilder};
pub use self::core::{Operation, State, StateHistory, StateTransition};
pub use engine::{Behavior, Machine, Step};
pub use vending::{VendingError, VendingMachine, VendingOperation, VendingState};
