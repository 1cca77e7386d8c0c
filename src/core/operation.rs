//! The `Operation` trait for caller-invoked actions.

use std::fmt::Debug;

/// An action a caller asks a machine to perform.
///
/// Operations may carry a payload (an amount, a count); `name` identifies the
/// action itself and is what history records and log fields use.
///
/// ```rust
/// use vending_fsm::core::Operation;
///
/// #[derive(Clone, Debug)]
/// enum Door {
///     Open,
///     Lock { code: u16 },
/// }
///
/// impl Operation for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "open",
///             Self::Lock { .. } => "lock",
///         }
///     }
/// }
///
/// assert_eq!(Door::Lock { code: 1234 }.name(), "lock");
/// ```
pub trait Operation: Clone + Debug + Send + Sync {
    /// Name of the action, without its payload.
    fn name(&self) -> &str;
}
