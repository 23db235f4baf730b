//! Error types for building a seat catalog and loading venue configuration.
//!
//! Selection operations never fail: an unavailable seat or a full selection is
//! a silent no-op, not an error. Everything here is raised while the session is
//! being configured.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which per-row seat number list a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatListKind {
    /// The `sold` list
    Sold,
    /// The `blocked` list
    Blocked,
    /// The `gapAfter` list
    GapAfter,
}

impl fmt::Display for SeatListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sold => write!(f, "sold"),
            Self::Blocked => write!(f, "blocked"),
            Self::GapAfter => write!(f, "gapAfter"),
        }
    }
}

/// Malformed seating configuration
///
/// Fatal to the build or configuration call that raised it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Row labels are one to three uppercase ASCII letters or digits
    #[error("Row label {0:?} must be 1-3 uppercase ASCII letters or digits")]
    InvalidRowLabel(String),

    /// A row needs at least one seat
    #[error("Row {row} must have at least one seat")]
    EmptyRow {
        /// Offending row label
        row: String,
    },

    /// A sold, blocked or gap seat number does not exist in the row
    #[error("Row {row}: {kind} seat {seat} is outside 1..={seats}")]
    SeatOutOfRange {
        /// Offending row label
        row: String,
        /// List the number appeared in
        kind: SeatListKind,
        /// The out-of-range seat number
        seat: u32,
        /// Seat count of the row
        seats: u32,
    },

    /// A row holds more seats than seat numbers allow
    #[error("Row {row} has {seats} seats; at most {max} are allowed")]
    TooManySeats {
        /// Offending row label
        row: String,
        /// Seat count of the row
        seats: u32,
        /// Largest accepted seat count
        max: u32,
    },

    /// Two rows share a label
    #[error("Row label {0} is used more than once")]
    DuplicateRowLabel(String),

    /// Seat groups need a key
    #[error("Seat group key cannot be empty")]
    EmptyGroupKey,

    /// Two seat groups share a key
    #[error("Seat group key {0} is used more than once")]
    DuplicateGroupKey(String),

    /// Show times need an identifier
    #[error("Show time identifier cannot be empty")]
    EmptyShowId,

    /// Two show times share an identifier
    #[error("Show time {0} is listed more than once")]
    DuplicateShowId(String),

    /// The ticket count cap is at least one
    #[error("Ticket count must be at least 1, got {0}")]
    InvalidTicketCount(u32),
}

/// Failure to load a venue configuration file
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read
    #[error("Failed to read venue file {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid venue document
    #[error("Invalid venue JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but describes an invalid venue
    #[error(transparent)]
    Config(#[from] ConfigError),
}
