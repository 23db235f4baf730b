//! # Cinema Seating Core
//!
//! Core traits and types for the seat-selection engine.
//!
//! The engine is written as a set of reducers: pure functions that take the
//! current state and an action, mutate the state in place and return a list
//! of effect descriptions. A [`store::Store`] owns the state and feeds any
//! follow-up actions described by the effects back into the reducer.
//!
//! ## Core Concepts
//!
//! - **State**: Session state for a feature (e.g. the current seat selection)
//! - **Action**: All possible inputs to a reducer (user intents and follow-ups)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Description of follow-up work (never executed by the reducer)
//! - **Environment**: Read-only collaborators injected into the reducer
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden state coupling)
//! - Synchronous, single-session execution
//!
//! ## Example
//!
//! ```
//! use cinema_seating_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//! use cinema_seating_core::store::Store;
//!
//! #[derive(Debug, Default)]
//! struct HoldState {
//!     held: u32,
//! }
//!
//! #[derive(Debug, Clone)]
//! enum HoldAction {
//!     Hold,
//!     Release,
//! }
//!
//! struct HoldReducer;
//!
//! impl Reducer for HoldReducer {
//!     type State = HoldState;
//!     type Action = HoldAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut HoldState,
//!         action: HoldAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<HoldAction>; 4]> {
//!         match action {
//!             HoldAction::Hold => state.held += 1,
//!             HoldAction::Release => state.held = state.held.saturating_sub(1),
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut store = Store::new(HoldState::default(), HoldReducer, ());
//! store.send(HoldAction::Hold).ok();
//! assert_eq!(store.state(|s| s.held), 1);
//! ```

pub use smallvec::{SmallVec, smallvec};

pub mod store;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The session state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected read-only collaborators this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for SelectionReducer {
    ///     type State = SelectionState;
    ///     type Action = SelectionAction;
    ///     type Environment = SelectionEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut SelectionState,
    ///         action: SelectionAction,
    ///         env: &SelectionEnvironment,
    ///     ) -> SmallVec<[Effect<SelectionAction>; 4]> {
    ///         match action {
    ///             SelectionAction::ResetSelection => {
    ///                 state.reset();
    ///                 smallvec![Effect::None]
    ///             }
    ///             _ => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected collaborators
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action against the current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be interpreted by the store
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected collaborators
        ///
        /// # Returns
        ///
        /// The effects to be interpreted by the store
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Follow-up work descriptions
///
/// Effects are values returned by reducers. The engine performs no I/O, so the
/// only work an effect can describe is another action to feed back into the
/// reducer.
pub mod effect {
    /// Effect type - describes follow-up work to be interpreted by the store
    ///
    /// Effects are NOT executed by the reducer. They are descriptions of what
    /// should happen next, returned from reducers and interpreted by
    /// [`crate::store::Store`].
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects one after another, in order
        Sequential(Vec<Effect<Action>>),

        /// Feed an action back into the reducer once the current one finishes
        Dispatch(Box<Action>),
    }

    impl<Action> Effect<Action> {
        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Describe a follow-up action
        #[must_use]
        pub fn dispatch(action: Action) -> Effect<Action> {
            Effect::Dispatch(Box::new(action))
        }

        /// Returns `true` if this effect describes no work at all
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Sequential(effects) => effects.iter().all(Effect::is_none),
                Effect::Dispatch(_) => false,
            }
        }

        /// Flatten the effect into the actions it dispatches, in order
        #[must_use]
        pub fn into_actions(self) -> Vec<Action> {
            let mut actions = Vec::new();
            self.collect_actions(&mut actions);
            actions
        }

        fn collect_actions(self, actions: &mut Vec<Action>) {
            match self {
                Effect::None => {},
                Effect::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_actions(actions);
                    }
                },
                Effect::Dispatch(action) => actions.push(*action),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum SeatAction {
        Hold(u32),
        Release(u32),
    }

    #[test]
    fn none_is_none() {
        assert!(Effect::<SeatAction>::None.is_none());
        assert!(Effect::<SeatAction>::chain(vec![Effect::None, Effect::None]).is_none());
    }

    #[test]
    fn dispatch_is_not_none() {
        let effect = Effect::chain(vec![Effect::None, Effect::dispatch(SeatAction::Hold(1))]);
        assert!(!effect.is_none());
    }

    #[test]
    fn into_actions_preserves_order() {
        let effect = Effect::chain(vec![
            Effect::dispatch(SeatAction::Hold(1)),
            Effect::None,
            Effect::chain(vec![
                Effect::dispatch(SeatAction::Release(1)),
                Effect::dispatch(SeatAction::Hold(2)),
            ]),
        ]);

        assert_eq!(
            effect.into_actions(),
            vec![
                SeatAction::Hold(1),
                SeatAction::Release(1),
                SeatAction::Hold(2)
            ]
        );
    }
}
