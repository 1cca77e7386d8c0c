//! The `State` trait implemented by every machine state set.
//!
//! A state is a plain value describing which behavioral mode a machine is
//! in. Everything here is inspection only; changing state is the engine's job.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// Implementors are usually closed unit-variant enums, most conveniently
/// declared through [`state_enum!`](crate::state_enum).
///
/// # Required Traits
///
/// - `Clone` + `PartialEq`: states are compared and copied into history
/// - `Debug`: states appear in diagnostics and log fields
/// - `Serialize` + `Deserialize`: states travel inside history records
///
/// # Example
///
/// ```rust
/// use vending_fsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Jammed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Jammed => "Jammed",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
/// }
///
/// assert_eq!(DoorState::Closed.name(), "Closed");
/// assert!(!DoorState::Open.is_final());
/// assert!(DoorState::Jammed.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in log fields and history records.
    fn name(&self) -> &str;

    /// Whether this state marks the work as complete.
    ///
    /// Informational only: the engine still evaluates operations from a final
    /// state, so a behavior that must refuse them does so in its own `step`.
    /// Defaults to `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this state represents a failure condition.
    ///
    /// Defaults to `false`.
    fn is_error(&self) -> bool {
        false
    }
}
