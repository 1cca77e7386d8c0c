//! Core machine vocabulary.
//!
//! - `State`: the closed set of modes a machine can be in
//! - `Operation`: the actions callers request
//! - `StateHistory`: in-memory record of committed transitions
//!
//! Nothing in this module mutates anything; the engine owns all mutation.

mod history;
mod operation;
mod state;

pub use history::{StateHistory, StateTransition};
pub use operation::Operation;
pub use state::State;
