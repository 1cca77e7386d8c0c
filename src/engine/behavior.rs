//! Transition functions and the steps they produce.

use crate::core::{Operation, State};
use std::fmt::Debug;

/// The verdict of a transition function for one operation.
///
/// A step carries the outcome reported to the caller, the state to move to
/// (if any), and a replacement data value (if any). The machine commits the
/// next state whenever one is present, even for a rejected outcome; a data
/// replacement is committed only alongside a successful outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<S, D, E> {
    next: Option<S>,
    data: Option<D>,
    outcome: Result<(), E>,
}

impl<S, D, E> Step<S, D, E> {
    /// Accept the operation without leaving the current state.
    pub fn stay() -> Self {
        Self {
            next: None,
            data: None,
            outcome: Ok(()),
        }
    }

    /// Accept the operation and move to `next`.
    pub fn goto(next: S) -> Self {
        Self {
            next: Some(next),
            data: None,
            outcome: Ok(()),
        }
    }

    /// Reject the operation.
    pub fn reject(error: E) -> Self {
        Self {
            next: None,
            data: None,
            outcome: Err(error),
        }
    }

    /// Move to `next` as part of this step, whatever its outcome.
    pub fn moving_to(mut self, next: S) -> Self {
        self.next = Some(next);
        self
    }

    /// Replace the machine's data when this step is accepted.
    pub fn with_data(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }

    /// State to move to, or `None` to stay.
    pub fn next_state(&self) -> Option<&S> {
        self.next.as_ref()
    }

    /// Replacement data, committed only if the step is accepted.
    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    /// Result reported to the caller.
    pub fn outcome(&self) -> &Result<(), E> {
        &self.outcome
    }

    /// Whether the outcome is `Ok`.
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Split into `(next state, data replacement, outcome)`.
    ///
    /// The data replacement is dropped for rejected steps.
    pub fn into_parts(self) -> (Option<S>, Option<D>, Result<(), E>) {
        let data = if self.outcome.is_ok() { self.data } else { None };
        (self.next, data, self.outcome)
    }
}

/// A pure transition function over a closed state set.
///
/// `step` must be total: every `(state, operation)` pair yields a step, with
/// rejections expressed as error outcomes rather than ignored input. It reads
/// the data but never retains it.
///
/// # Example
///
/// ```rust
/// use vending_fsm::core::Operation;
/// use vending_fsm::engine::{Behavior, Machine, Step};
/// use vending_fsm::state_enum;
///
/// state_enum! {
///     #[derive(Copy)]
///     pub enum Gate {
///         Locked,
///         Unlocked,
///     }
/// }
///
/// #[derive(Clone, Debug)]
/// enum Input {
///     Coin,
///     Push,
/// }
///
/// impl Operation for Input {
///     fn name(&self) -> &str {
///         match self {
///             Self::Coin => "coin",
///             Self::Push => "push",
///         }
///     }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("gate is locked")]
/// struct GateLocked;
///
/// struct Turnstile;
///
/// impl Behavior for Turnstile {
///     type State = Gate;
///     type Operation = Input;
///     type Data = u32;
///     type Error = GateLocked;
///
///     fn step(state: &Gate, operation: &Input, passes: &u32) -> Step<Gate, u32, GateLocked> {
///         match (state, operation) {
///             (Gate::Locked, Input::Coin) => Step::goto(Gate::Unlocked),
///             (Gate::Locked, Input::Push) => Step::reject(GateLocked),
///             (Gate::Unlocked, Input::Coin) => Step::stay(),
///             (Gate::Unlocked, Input::Push) => Step::goto(Gate::Locked).with_data(passes + 1),
///         }
///     }
/// }
///
/// let mut gate = Machine::<Turnstile>::new(Gate::Locked, 0);
/// assert!(gate.apply(Input::Push).is_err());
/// gate.apply(Input::Coin).unwrap();
/// gate.apply(Input::Push).unwrap();
/// assert_eq!(*gate.data(), 1);
/// assert_eq!(gate.current_state(), &Gate::Locked);
/// ```
pub trait Behavior {
    type State: State;
    type Operation: Operation;
    type Data: Clone + Debug;
    type Error: std::error::Error;

    /// Evaluate `operation` against `state` and `data`.
    fn step(
        state: &Self::State,
        operation: &Self::Operation,
        data: &Self::Data,
    ) -> Step<Self::State, Self::Data, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestStep = Step<&'static str, u32, String>;

    #[test]
    fn stay_accepts_without_moving() {
        let step = TestStep::stay();
        assert!(step.is_accepted());
        assert!(step.next_state().is_none());
        assert!(step.data().is_none());
    }

    #[test]
    fn goto_accepts_and_moves() {
        let step = TestStep::goto("Busy").with_data(4);
        assert_eq!(step.next_state(), Some(&"Busy"));
        assert_eq!(step.into_parts(), (Some("Busy"), Some(4), Ok(())));
    }

    #[test]
    fn rejection_may_still_move() {
        let step = TestStep::reject("empty".to_string()).moving_to("Empty");
        assert!(!step.is_accepted());
        assert_eq!(step.next_state(), Some(&"Empty"));
    }

    #[test]
    fn rejection_drops_data_replacement() {
        let step = TestStep::reject("nope".to_string()).with_data(99);
        let (next, data, outcome) = step.into_parts();
        assert!(next.is_none());
        assert!(data.is_none());
        assert_eq!(outcome, Err("nope".to_string()));
    }
}
