//! Domain types for the seat-selection engine.
//!
//! Configuration inputs (`SeatSpec`, `SeatGroupSpec`) describe a screen the way
//! a venue authors it. The builder turns them into immutable catalog types
//! (`Seat`, `Row`, `SeatGroup`) that never change for the rest of the session.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroU32;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a seat: row label plus zero-padded seat number (e.g. `N09`)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    /// Wraps an existing identifier such as `"N09"`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds the identifier for `number` in row `row`
    #[must_use]
    pub fn from_parts(row: &str, number: u32) -> Self {
        Self(format!("{row}{number:02}"))
    }

    /// The identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SeatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Value Objects
// ============================================================================

/// Availability of a seat, fixed when the catalog is built
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Free to select
    Available,
    /// Already sold for this show
    Sold,
    /// Administratively disabled (staff hold, maintenance)
    Blocked,
}

impl SeatStatus {
    /// Only available seats may enter a selection
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Sold => write!(f, "sold"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}

/// User-chosen cap on the number of seats in a selection (always at least 1)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TicketCount(NonZeroU32);

impl TicketCount {
    /// The cap a fresh session starts with unless configured otherwise
    pub const DEFAULT: Self = match NonZeroU32::new(2) {
        Some(count) => Self(count),
        None => Self(NonZeroU32::MIN),
    };

    /// Validates a ticket count
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTicketCount`] if `count` is zero.
    pub const fn new(count: u32) -> Result<Self, ConfigError> {
        match NonZeroU32::new(count) {
            Some(count) => Ok(Self(count)),
            None => Err(ConfigError::InvalidTicketCount(count)),
        }
    }

    /// The cap as a plain integer
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The cap as a collection length
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0.get() as usize
    }
}

impl Default for TicketCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for TicketCount {
    type Error = ConfigError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<TicketCount> for u32 {
    fn from(count: TicketCount) -> Self {
        count.get()
    }
}

impl fmt::Display for TicketCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Configuration Inputs
// ============================================================================

/// One row of a screen as authored in the venue configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatSpec {
    /// Row label (single uppercase letter or short code)
    pub row: String,
    /// Number of seats in the row, numbered from 1
    pub seats: u32,
    /// Unit price; falls back to the group price when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    /// Seat numbers already sold
    #[serde(default)]
    pub sold: BTreeSet<u32>,
    /// Seat numbers administratively disabled
    #[serde(default)]
    pub blocked: BTreeSet<u32>,
    /// Seat numbers followed by an aisle gap
    #[serde(default)]
    pub gap_after: BTreeSet<u32>,
}

impl SeatSpec {
    /// A row with `seats` seats and no sold, blocked or gap entries
    #[must_use]
    pub fn new(row: impl Into<String>, seats: u32) -> Self {
        Self {
            row: row.into(),
            seats,
            price: None,
            sold: BTreeSet::new(),
            blocked: BTreeSet::new(),
            gap_after: BTreeSet::new(),
        }
    }

    /// Sets an explicit unit price for this row
    #[must_use]
    pub const fn with_price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    /// Marks seats as sold
    #[must_use]
    pub fn with_sold(mut self, seats: impl IntoIterator<Item = u32>) -> Self {
        self.sold.extend(seats);
        self
    }

    /// Marks seats as blocked
    #[must_use]
    pub fn with_blocked(mut self, seats: impl IntoIterator<Item = u32>) -> Self {
        self.blocked.extend(seats);
        self
    }

    /// Inserts aisle gaps after the given seats
    #[must_use]
    pub fn with_gap_after(mut self, seats: impl IntoIterator<Item = u32>) -> Self {
        self.gap_after.extend(seats);
        self
    }
}

/// A priced tier of rows as authored in the venue configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatGroupSpec {
    /// Stable key (e.g. `recliner`)
    pub key: String,
    /// Display label (e.g. `₹360 Recliner Rows`)
    pub label: String,
    /// Unit price shared by the rows of this group
    pub price: u64,
    /// Free-text banner (e.g. `Filling fast`)
    #[serde(default)]
    pub status_tag: String,
    /// Rows in display order
    pub rows: Vec<SeatSpec>,
}

// ============================================================================
// Catalog Entities
// ============================================================================

/// A selectable position in the seat map
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Catalog-wide unique identifier
    pub id: SeatId,
    /// Row label
    pub row: String,
    /// Seat number within the row, starting at 1
    pub number: u32,
    /// Display label (zero-padded seat number)
    pub label: String,
    /// Availability, fixed for the session
    pub status: SeatStatus,
    /// Unit price
    pub price: u64,
}

impl Seat {
    /// Whether this seat may enter a selection
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        self.status.is_selectable()
    }
}

/// A non-selectable aisle spacer inside a row
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    /// Identifier derived from the preceding seat (e.g. `N05-gap`)
    pub id: String,
}

/// One position in a row's ordered sequence
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RowItem {
    /// A seat
    Seat(Seat),
    /// An aisle gap
    Gap(Gap),
}

impl RowItem {
    /// The seat at this position, if it is not a gap
    #[must_use]
    pub const fn as_seat(&self) -> Option<&Seat> {
        match self {
            Self::Seat(seat) => Some(seat),
            Self::Gap(_) => None,
        }
    }

    /// Whether this position is a gap
    #[must_use]
    pub const fn is_gap(&self) -> bool {
        matches!(self, Self::Gap(_))
    }
}

/// A row of seats with gaps interleaved
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Row label
    pub label: String,
    /// Seats in ascending number order, gaps after their configured seat
    pub items: Vec<RowItem>,
}

impl Row {
    /// Seats of the row in order, skipping gaps
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.items.iter().filter_map(RowItem::as_seat)
    }

    /// Number of available seats in the row
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.seats().filter(|seat| seat.is_selectable()).count()
    }
}

/// A priced tier of rows
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatGroup {
    /// Stable key
    pub key: String,
    /// Display label
    pub label: String,
    /// Unit price
    pub price: u64,
    /// Free-text banner
    pub status_tag: String,
    /// Rows in authored order
    pub rows: Vec<Row>,
}

impl SeatGroup {
    /// Seats of every row of the group, in order
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flat_map(Row::seats)
    }
}
