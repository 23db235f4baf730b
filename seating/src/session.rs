//! Single-session facade over the selection store.
//!
//! `SeatingSession` is the whole surface a presentation layer talks to: it
//! reads the catalog, show list and selection snapshot, and forwards user
//! intents as selection actions. Commands return the resulting snapshot.

use crate::catalog::Catalog;
use crate::config::{ShowTime, VenueConfig};
use crate::error::ConfigError;
use crate::pricing::{OrderSummary, PricingPolicy};
use crate::selection::{
    SelectionAction, SelectionEnvironment, SelectionReducer, SelectionState,
};
use crate::types::{Seat, SeatId, TicketCount};
use cinema_seating_core::store::Store;
use serde::Serialize;
use std::ops::RangeInclusive;
use std::sync::Arc;

type SelectionStore =
    Store<SelectionState, SelectionAction, SelectionEnvironment, SelectionReducer>;

/// Read-only view of the selection handed to the presentation layer
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    /// Current ticket cap
    pub ticket_count: u32,
    /// Selected seats in pick order
    pub selected: Vec<Seat>,
    /// Priced summary of `selected`
    pub summary: OrderSummary,
}

/// One user's seat-selection session for a venue
pub struct SeatingSession {
    store: SelectionStore,
}

impl SeatingSession {
    /// Build the catalog and start with an empty selection
    ///
    /// The first configured show, if any, becomes the active show and the
    /// ticket cap starts at the venue's default.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the seat layout is invalid.
    pub fn new(venue: VenueConfig) -> Result<Self, ConfigError> {
        let catalog = Arc::new(venue.build_catalog()?);
        let active_show = venue.shows.first().map(|show| show.id.clone());
        let state = SelectionState::new(venue.default_ticket_count, active_show);
        let env = SelectionEnvironment::new(catalog, venue.shows, venue.pricing);

        Ok(Self {
            store: Store::new(state, SelectionReducer::new(), env),
        })
    }

    /// The seat catalog
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.store.environment().catalog
    }

    /// Shows that can be selected
    #[must_use]
    pub fn shows(&self) -> &[ShowTime] {
        &self.store.environment().shows
    }

    /// Pricing constants in effect
    #[must_use]
    pub fn pricing(&self) -> &PricingPolicy {
        &self.store.environment().pricing
    }

    /// The show the selection belongs to
    #[must_use]
    pub fn active_show(&self) -> Option<&ShowTime> {
        let id = self.store.state(|s| s.active_show().map(str::to_string))?;
        self.shows().iter().find(|show| show.id == id)
    }

    /// Current ticket cap, selection and order summary
    #[must_use]
    pub fn selection_state(&self) -> SelectionSnapshot {
        let pricing = self.store.environment().pricing;
        self.store.state(|s| SelectionSnapshot {
            ticket_count: s.ticket_count().get(),
            selected: s.selected().to_vec(),
            summary: s.summary(&pricing),
        })
    }

    /// Whether a seat is part of the selection
    #[must_use]
    pub fn is_selected(&self, id: &SeatId) -> bool {
        self.store.state(|s| s.is_selected(id))
    }

    /// Whether there is anything to pay for
    #[must_use]
    pub fn can_checkout(&self) -> bool {
        self.store.state(SelectionState::can_checkout)
    }

    /// Ticket counts the user may pick from: one up to the number of available seats
    ///
    /// Empty when the screen has no available seat.
    #[must_use]
    pub fn ticket_count_options(&self) -> RangeInclusive<u32> {
        let available = u32::try_from(self.catalog().total_available()).unwrap_or(u32::MAX);
        1..=available
    }

    /// Add or remove a seat; unavailable seats and a full selection are ignored
    pub fn toggle_seat(&mut self, seat_id: &SeatId) -> SelectionSnapshot {
        self.dispatch(SelectionAction::ToggleSeat {
            seat_id: seat_id.clone(),
        })
    }

    /// Change the ticket cap, dropping the most recent picks that no longer fit
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTicketCount`] if `count` is zero; the
    /// selection is left untouched.
    pub fn set_ticket_count(&mut self, count: u32) -> Result<SelectionSnapshot, ConfigError> {
        let count = TicketCount::new(count)?;
        Ok(self.dispatch(SelectionAction::SetTicketCount { count }))
    }

    /// Drop every selected seat
    ///
    /// Must be called whenever the caller switches show by means other than
    /// [`SeatingSession::select_show`].
    pub fn reset_selection(&mut self) -> SelectionSnapshot {
        self.dispatch(SelectionAction::ResetSelection)
    }

    /// Switch to another show and clear the selection; unknown shows are ignored
    pub fn select_show(&mut self, show_id: &str) -> SelectionSnapshot {
        self.dispatch(SelectionAction::SelectShow {
            show_id: show_id.to_string(),
        })
    }

    fn dispatch(&mut self, action: SelectionAction) -> SelectionSnapshot {
        if let Err(error) = self.store.send(action) {
            tracing::error!(%error, "Selection action did not settle");
        }
        self.selection_state()
    }
}

impl std::fmt::Debug for SeatingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatingSession")
            .field("seats", &self.catalog().seat_count())
            .field("shows", &self.shows().len())
            .field("selection", &self.selection_state())
            .finish()
    }
}
