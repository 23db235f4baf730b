//! # Cinema Seating Testing
//!
//! Testing utilities and helpers for the cinema seating engine.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`assertions`]: Assertion helpers for effects
//! - [`properties`]: Shared proptest configuration
//! - [`init_test_tracing`]: Opt-in log output for tests
//!
//! ## Example
//!
//! ```ignore
//! use cinema_seating_testing::{assertions, ReducerTest};
//!
//! #[test]
//! fn reset_clears_selection() {
//!     ReducerTest::new(SelectionReducer::new())
//!         .with_env(test_environment())
//!         .given_state(state_with_two_seats())
//!         .when_action(SelectionAction::ResetSelection)
//!         .then_state(|state| assert!(state.selected().is_empty()))
//!         .then_effects(assertions::assert_no_effects)
//!         .run();
//! }
//! ```


/// Property-based testing utilities
///
/// Shared configuration for the proptest suites of the workspace.
pub mod properties {
    use proptest::test_runner::Config;

    /// Number of cases each property runs by default
    pub const DEFAULT_CASES: u32 = 256;

    /// Proptest configuration used by the seating property suites
    ///
    /// Honours `PROPTEST_CASES` when set, otherwise runs [`DEFAULT_CASES`].
    #[must_use]
    pub fn seating_config() -> Config {
        let cases = std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_CASES);

        Config {
            cases,
            ..Config::default()
        }
    }
}

/// Install a `tracing` subscriber for tests
///
/// Output is captured by the test harness and filtered through `RUST_LOG`.
/// Safe to call from many tests; only the first call installs a subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use reducer_test::{ReducerTest, assertions};
