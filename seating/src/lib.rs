//! Cinema seat selection.
//!
//! Builds a seating chart from venue configuration, tracks a bounded,
//! ordered selection of seats and prices it. The engine is a pure in-memory
//! state machine for a single session: no persistence, no I/O during
//! selection, no shared mutable state.
//!
//! - [`catalog`]: seat map builder producing an immutable [`Catalog`]
//! - [`classifier`]: `blocked > sold > available` status rule
//! - [`selection`]: selection reducer (toggle, resize, reset, show change)
//! - [`pricing`]: subtotal, convenience fee and order total
//! - [`config`]: venue documents and environment-driven settings
//! - [`session`]: the facade a presentation layer drives
//!
//! # Quick Start
//!
//! ```no_run
//! use seat_selection::{SeatId, SeatingSession, VenueConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SeatingSession::new(VenueConfig::bundled()?)?;
//!
//! session.set_ticket_count(2)?;
//! session.toggle_seat(&SeatId::new("N09"));
//! let snapshot = session.toggle_seat(&SeatId::new("N10"));
//!
//! assert_eq!(snapshot.summary.subtotal, 720);
//! assert_eq!(snapshot.summary.convenience_fee, 111);
//! assert_eq!(snapshot.summary.order_total, 831);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod pricing;
pub mod selection;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::{SeatingSettings, ShowAvailability, ShowTime, VenueConfig};
pub use error::{ConfigError, LoadError};
pub use pricing::{FeeRate, OrderSummary, PricingPolicy};
pub use selection::{SelectionAction, SelectionEnvironment, SelectionReducer, SelectionState};
pub use session::{SeatingSession, SelectionSnapshot};
pub use types::{Seat, SeatGroup, SeatGroupSpec, SeatId, SeatSpec, SeatStatus, TicketCount};
