//! In-memory record of committed state transitions.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One committed move from one state to another.
///
/// # Example
///
/// ```rust
/// use vending_fsm::core::StateTransition;
/// use vending_fsm::vending::VendingState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: VendingState::Stocked,
///     to: VendingState::Requested,
///     operation: "request_item".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.operation, "request_item");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// State before the operation
    pub from: S,
    /// State the operation committed
    pub to: S,
    /// Name of the operation that caused the move
    pub operation: String,
    /// When the move was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use vending_fsm::core::{StateHistory, StateTransition};
/// use vending_fsm::vending::VendingState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: VendingState::Stocked,
///         to: VendingState::Requested,
///         operation: "request_item".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: VendingState::Requested,
///         to: VendingState::Funded,
///         operation: "insert_payment".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(
///     history.get_path(),
///     vec![
///         &VendingState::Stocked,
///         &VendingState::Requested,
///         &VendingState::Funded,
///     ]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Keep only the `limit` most recent transitions.
    ///
    /// The path then starts at the `from` state of the oldest kept record.
    pub fn retain_last(mut self, limit: usize) -> Self {
        self.truncate_to_last(limit);
        self
    }

    /// In-place form of [`retain_last`](Self::retain_last).
    pub fn truncate_to_last(&mut self, limit: usize) {
        let excess = self.transitions.len().saturating_sub(limit);
        self.transitions.drain(..excess);
    }

    /// States traversed: the first recorded `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the first and last recorded transitions.
    ///
    /// `None` when empty, or if the clock went backwards between records.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.first()?;
        let last = self.transitions.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// The most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
