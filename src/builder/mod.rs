//! Builder API for configuring vending machines.
//!
//! This module provides the fluent [`VendingMachineBuilder`], its error
//! types, and the [`state_enum!`](crate::state_enum) macro for declaring
//! state sets with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::{BuildError, ConfigViolation};
pub use machine::{InitialStatePolicy, VendingMachineBuilder, DEFAULT_HISTORY_LIMIT};
