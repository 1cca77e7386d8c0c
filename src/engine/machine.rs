//! Machine that owns state and data and commits steps.

use crate::core::{Operation, State, StateHistory, StateTransition};
use crate::engine::behavior::{Behavior, Step};
use chrono::Utc;
use std::marker::PhantomData;
use tracing::{debug, info};

/// Owns the current state, the data it protects, and the transition history.
///
/// Every mutation goes through [`apply`](Self::apply), which evaluates the
/// behavior's pure transition function and then commits its step in one
/// `&mut self` call. Concurrent callers need a lock around the whole call.
pub struct Machine<B: Behavior> {
    current: B::State,
    data: B::Data,
    history: StateHistory<B::State>,
    history_limit: Option<usize>,
    _behavior: PhantomData<fn() -> B>,
}

impl<B: Behavior> Machine<B> {
    /// Create a machine in `initial` owning `data`.
    pub fn new(initial: B::State, data: B::Data) -> Self {
        Self {
            current: initial,
            data,
            history: StateHistory::new(),
            history_limit: None,
            _behavior: PhantomData,
        }
    }

    /// Bound the history to the `limit` most recent transitions.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn current_state(&self) -> &B::State {
        &self.current
    }

    pub fn data(&self) -> &B::Data {
        &self.data
    }

    pub fn history(&self) -> &StateHistory<B::State> {
        &self.history
    }

    /// Whether the current state reports itself final. `apply` does not
    /// consult this.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Evaluate `operation` without committing anything (pure).
    pub fn preview(&self, operation: &B::Operation) -> Step<B::State, B::Data, B::Error> {
        B::step(&self.current, operation, &self.data)
    }

    /// Evaluate `operation` and commit the resulting step.
    ///
    /// An accepted step replaces the data (if it carries a replacement) and
    /// moves to its next state. A rejected step leaves the data untouched but
    /// still moves if it names a next state.
    pub fn apply(&mut self, operation: B::Operation) -> Result<(), B::Error> {
        debug!(
            state = self.current.name(),
            operation = operation.name(),
            "applying operation"
        );

        let (next, data, outcome) = self.preview(&operation).into_parts();

        if let Some(data) = data {
            self.data = data;
        }
        if let Some(next) = next {
            self.commit_transition(next, &operation);
        }

        if let Err(error) = &outcome {
            debug!(
                state = self.current.name(),
                operation = operation.name(),
                %error,
                "operation rejected"
            );
        }
        outcome
    }

    fn commit_transition(&mut self, next: B::State, operation: &B::Operation) {
        info!(
            from = self.current.name(),
            to = next.name(),
            operation = operation.name(),
            "state transition"
        );

        let from = std::mem::replace(&mut self.current, next);
        let record = StateTransition {
            from,
            to: self.current.clone(),
            operation: operation.name().to_string(),
            timestamp: Utc::now(),
        };
        self.history.push(record);
        if let Some(limit) = self.history_limit {
            self.history.truncate_to_last(limit);
        }
    }
}

impl<B: Behavior> std::fmt::Debug for Machine<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("data", &self.data)
            .field("transitions", &self.history.len())
            .finish()
    }
}
