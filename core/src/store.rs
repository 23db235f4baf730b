//! Synchronous store for a single session.
//!
//! The store owns the state, the reducer and the environment. Every action
//! sent through [`Store::send`] is reduced to completion, together with any
//! follow-up actions its effects dispatch, before `send` returns. There is no
//! background work and no locking: the store is owned by exactly one session.

use crate::effect::Effect;
use crate::reducer::Reducer;
use std::collections::VecDeque;
use thiserror::Error;

/// Maximum number of actions a single `send` may reduce, including follow-ups.
pub const DEFAULT_ACTION_BUDGET: usize = 64;

/// Errors that can occur while driving the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Follow-up actions kept dispatching more follow-ups
    ///
    /// The state reflects every action reduced before the budget ran out.
    #[error("Action budget of {budget} exhausted; reducer keeps dispatching follow-up actions")]
    ActionBudgetExhausted {
        /// The budget that was exceeded
        budget: usize,
    },
}

/// The Store - runtime for a single reducer
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Example
///
/// ```ignore
/// let mut store = Store::new(
///     SelectionState::new(ticket_count, None),
///     SelectionReducer::new(),
///     environment,
/// );
///
/// store.send(SelectionAction::ResetSelection)?;
/// let selected = store.state(|s| s.selected().len());
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: S,
    reducer: R,
    environment: E,
    action_budget: usize,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    A: std::fmt::Debug,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub const fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
            action_budget: DEFAULT_ACTION_BUDGET,
        }
    }

    /// Override the per-`send` action budget
    #[must_use]
    pub fn with_action_budget(mut self, budget: usize) -> Self {
        self.action_budget = budget;
        self
    }

    /// Send an action to the store
    ///
    /// Reduces the action, then every action dispatched by the resulting
    /// effects, breadth-first in dispatch order.
    ///
    /// # Returns
    ///
    /// The number of actions reduced (the sent action plus follow-ups).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ActionBudgetExhausted`] if the follow-up chain
    /// does not settle within the action budget.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub fn send(&mut self, action: A) -> Result<usize, StoreError> {
        let mut queue = VecDeque::from([action]);
        let mut reduced = 0;

        while let Some(action) = queue.pop_front() {
            if reduced == self.action_budget {
                tracing::error!(
                    budget = self.action_budget,
                    pending = queue.len() + 1,
                    "Action budget exhausted"
                );
                return Err(StoreError::ActionBudgetExhausted {
                    budget: self.action_budget,
                });
            }

            tracing::trace!(?action, "Reducing action");
            let effects = self
                .reducer
                .reduce(&mut self.state, action, &self.environment);
            reduced += 1;

            queue.extend(effects.into_iter().flat_map(Effect::into_actions));
        }

        Ok(reduced)
    }

    /// Read current state via a closure
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        f(&self.state)
    }

    /// The injected environment
    pub const fn environment(&self) -> &E {
        &self.environment
    }
}
