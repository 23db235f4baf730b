//! Availability classification for a single seat.
//!
//! Precedence is `blocked > sold > available`. A blocked seat is reported as
//! blocked even when the configuration also lists it as sold.

use crate::types::SeatStatus;
use std::collections::BTreeSet;

/// Classify a seat number against the sold and blocked sets of its row
#[must_use]
pub fn classify(seat_number: u32, sold: &BTreeSet<u32>, blocked: &BTreeSet<u32>) -> SeatStatus {
    if blocked.contains(&seat_number) {
        SeatStatus::Blocked
    } else if sold.contains(&seat_number) {
        SeatStatus::Sold
    } else {
        SeatStatus::Available
    }
}
