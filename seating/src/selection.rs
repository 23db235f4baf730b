//! Selection engine.
//!
//! Holds the bounded, ordered set of seats the user has picked for the active
//! show. Rejections (unavailable seat, full selection, unknown seat) are silent:
//! the state is left unchanged and nothing is returned to signal them.
//!
//! # Show changes
//!
//! Seat identities are scoped to a show, so a selection never survives a show
//! change. [`SelectionAction::SelectShow`] records the new show and dispatches
//! [`SelectionAction::ResetSelection`]; callers that track the active show
//! themselves must send `ResetSelection` whenever it changes.

use crate::catalog::Catalog;
use crate::config::ShowTime;
use crate::pricing::{OrderSummary, PricingPolicy, summarize};
use crate::types::{Seat, SeatId, TicketCount};
use cinema_seating_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// State
// ============================================================================

/// Result of toggling a seat
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The seat was appended to the selection
    Selected,
    /// The seat was already selected and has been removed
    Deselected,
    /// The seat is sold or blocked; nothing changed
    Unavailable,
    /// The selection already holds `ticket_count` seats; nothing changed
    AtCapacity,
}

/// Current selection for one session
///
/// Fields are only changed through the selection rules below, so the
/// selection never exceeds the cap and only holds available seats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    ticket_count: TicketCount,
    selected: Vec<Seat>,
    active_show: Option<String>,
}

impl SelectionState {
    /// An empty selection
    #[must_use]
    pub const fn new(ticket_count: TicketCount, active_show: Option<String>) -> Self {
        Self {
            ticket_count,
            selected: Vec::new(),
            active_show,
        }
    }

    /// Toggle a seat in or out of the selection
    ///
    /// Sold and blocked seats are ignored. A selected seat is removed, keeping
    /// the order of the others. Otherwise the seat is appended unless the
    /// selection is full.
    pub fn toggle(&mut self, seat: &Seat) -> ToggleOutcome {
        if !seat.is_selectable() {
            return ToggleOutcome::Unavailable;
        }

        if let Some(position) = self.position(&seat.id) {
            self.selected.remove(position);
            return ToggleOutcome::Deselected;
        }

        if self.is_full() {
            return ToggleOutcome::AtCapacity;
        }

        self.selected.push(seat.clone());
        ToggleOutcome::Selected
    }

    /// Change the cap, dropping the most recently picked seats that no longer fit
    ///
    /// Returns the number of seats dropped.
    pub fn set_ticket_count(&mut self, count: TicketCount) -> usize {
        self.ticket_count = count;
        let before = self.selected.len();
        self.selected.truncate(count.as_usize());
        before - self.selected.len()
    }

    /// Clear the selection, keeping the cap and the active show
    ///
    /// Returns the number of seats dropped.
    pub fn reset(&mut self) -> usize {
        let dropped = self.selected.len();
        self.selected.clear();
        dropped
    }

    /// Maximum number of seats in the selection
    #[must_use]
    pub const fn ticket_count(&self) -> TicketCount {
        self.ticket_count
    }

    /// Selected seats in pick order; never longer than the cap
    #[must_use]
    pub fn selected(&self) -> &[Seat] {
        &self.selected
    }

    /// Show the selection belongs to
    #[must_use]
    pub fn active_show(&self) -> Option<&str> {
        self.active_show.as_deref()
    }

    fn position(&self, id: &SeatId) -> Option<usize> {
        self.selected.iter().position(|seat| seat.id == *id)
    }

    /// Whether a seat is part of the selection
    #[must_use]
    pub fn is_selected(&self, id: &SeatId) -> bool {
        self.position(id).is_some()
    }

    /// Whether no more seats can be added
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.selected.len() >= self.ticket_count.as_usize()
    }

    /// How many more seats can be added
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.ticket_count.as_usize().saturating_sub(self.selected.len())
    }

    /// Whether there is anything to pay for
    #[must_use]
    pub fn can_checkout(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Identifiers of the selected seats in pick order
    #[must_use]
    pub fn seat_ids(&self) -> Vec<SeatId> {
        self.selected.iter().map(|seat| seat.id.clone()).collect()
    }

    /// Price the current selection
    #[must_use]
    pub fn summary(&self, policy: &PricingPolicy) -> OrderSummary {
        summarize(&self.selected, policy)
    }
}

// ============================================================================
// Actions
// ============================================================================

/// User intents handled by the selection engine
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionAction {
    /// Add or remove a seat
    ToggleSeat {
        /// Seat to toggle
        seat_id: SeatId,
    },

    /// Change the ticket cap, truncating the selection if needed
    SetTicketCount {
        /// New cap
        count: TicketCount,
    },

    /// Drop every selected seat
    ResetSelection,

    /// Switch to another show; always followed by `ResetSelection`
    SelectShow {
        /// Show to switch to
        show_id: String,
    },
}

// ============================================================================
// Environment & Reducer
// ============================================================================

/// Read-only collaborators of the selection reducer
#[derive(Clone, Debug)]
pub struct SelectionEnvironment {
    /// Seat catalog of the screen
    pub catalog: Arc<Catalog>,
    /// Shows that can be selected
    pub shows: Arc<[ShowTime]>,
    /// Pricing constants
    pub pricing: PricingPolicy,
}

impl SelectionEnvironment {
    /// Creates a new `SelectionEnvironment`
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        shows: impl Into<Arc<[ShowTime]>>,
        pricing: PricingPolicy,
    ) -> Self {
        Self {
            catalog,
            shows: shows.into(),
            pricing,
        }
    }

    fn has_show(&self, show_id: &str) -> bool {
        self.shows.iter().any(|show| show.id == show_id)
    }
}

/// Reducer for the selection engine
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionReducer;

impl SelectionReducer {
    /// Creates a new `SelectionReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Action = SelectionAction;
    type Environment = SelectionEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SelectionAction::ToggleSeat { seat_id } => {
                let Some(seat) = env.catalog.seat(&seat_id) else {
                    tracing::debug!(seat = %seat_id, "Toggle ignored: unknown seat");
                    return smallvec![Effect::None];
                };

                let outcome = state.toggle(seat);
                tracing::debug!(
                    seat = %seat_id,
                    ?outcome,
                    selected = state.selected.len(),
                    ticket_count = %state.ticket_count,
                    "Seat toggled"
                );
            },

            SelectionAction::SetTicketCount { count } => {
                let dropped = state.set_ticket_count(count);
                tracing::debug!(ticket_count = %count, dropped, "Ticket count changed");
            },

            SelectionAction::ResetSelection => {
                let dropped = state.reset();
                tracing::debug!(dropped, "Selection reset");
            },

            SelectionAction::SelectShow { show_id } => {
                if !env.has_show(&show_id) {
                    tracing::debug!(show = %show_id, "Show change ignored: unknown show");
                    return smallvec![Effect::None];
                }

                tracing::info!(
                    from = ?state.active_show,
                    to = %show_id,
                    "Active show changed"
                );
                state.active_show = Some(show_id);
                return smallvec![Effect::dispatch(SelectionAction::ResetSelection)];
            },
        }

        smallvec![Effect::None]
    }
}
