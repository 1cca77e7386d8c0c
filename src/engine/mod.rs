//! The finite-state machine engine.
//!
//! A [`Behavior`] is a pure transition function over a closed state set; a
//! [`Machine`] owns the state, the data it protects, and the history, and
//! commits each [`Step`] atomically.
//!
//! # Key Concepts
//!
//! - **Steps**: a transition function never mutates; it returns a step
//!   describing the outcome, the next state, and replacement data
//! - **Commit rule**: next states commit on any outcome, data only on success
//! - **Totality**: every `(state, operation)` pair produces a step

mod behavior;
mod machine;

pub use behavior::{Behavior, Step};
pub use machine::Machine;
