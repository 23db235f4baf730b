//! Order pricing.
//!
//! All amounts are whole currency units held in `u64`; the fee rate is held in
//! basis points so no binary floating point is involved anywhere.

use crate::types::{Seat, SeatId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Basis points in one whole (100%)
const BASIS_POINTS_PER_UNIT: u128 = 10_000;

/// Convenience fee rate used by the bundled venue (15.4%)
pub const DEFAULT_FEE_RATE_BPS: u32 = 1_540;

/// Informational donation per ticket used by the bundled venue
pub const DEFAULT_DONATION_PER_TICKET: u64 = 1;

/// Convenience fee rate in basis points (1 bp = 0.01%)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeRate(u32);

impl FeeRate {
    /// A rate of `bps` basis points
    #[must_use]
    pub const fn from_basis_points(bps: u32) -> Self {
        Self(bps)
    }

    /// The rate in basis points
    #[must_use]
    pub const fn basis_points(self) -> u32 {
        self.0
    }

    /// Fee on `amount`, rounded half up to a whole unit
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    #[must_use]
    pub fn apply(self, amount: u64) -> u64 {
        let scaled = u128::from(amount) * u128::from(self.0) + BASIS_POINTS_PER_UNIT / 2;
        u64::try_from(scaled / BASIS_POINTS_PER_UNIT).unwrap_or(u64::MAX)
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self(DEFAULT_FEE_RATE_BPS)
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

/// Pricing constants for a venue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    /// Convenience fee rate applied to the seat subtotal
    #[serde(rename = "feeRateBps", default)]
    pub fee_rate: FeeRate,
    /// Suggested donation per ticket, shown but never charged
    #[serde(default = "default_donation")]
    pub donation_per_ticket: u64,
}

const fn default_donation() -> u64 {
    DEFAULT_DONATION_PER_TICKET
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            fee_rate: FeeRate::default(),
            donation_per_ticket: DEFAULT_DONATION_PER_TICKET,
        }
    }
}

/// Priced summary of a selection
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Selected seat identifiers in selection order
    pub seat_ids: Vec<SeatId>,
    /// Number of selected seats
    pub seat_count: usize,
    /// Sum of seat prices
    pub subtotal: u64,
    /// Convenience fee on the subtotal
    pub convenience_fee: u64,
    /// Subtotal plus convenience fee
    pub order_total: u64,
    /// Informational donation; not part of `order_total`
    pub suggested_donation: u64,
}

impl OrderSummary {
    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seat_ids.is_empty()
    }
}

/// Price a selection
///
/// `convenience_fee = round_half_up(subtotal × fee rate)` and
/// `order_total = subtotal + convenience_fee`.
#[must_use]
pub fn summarize(selected: &[Seat], policy: &PricingPolicy) -> OrderSummary {
    let subtotal = selected
        .iter()
        .fold(0_u64, |acc, seat| acc.saturating_add(seat.price));
    let convenience_fee = policy.fee_rate.apply(subtotal);
    let seat_count = selected.len();

    OrderSummary {
        seat_ids: selected.iter().map(|seat| seat.id.clone()).collect(),
        seat_count,
        subtotal,
        convenience_fee,
        order_total: subtotal.saturating_add(convenience_fee),
        suggested_donation: policy
            .donation_per_ticket
            .saturating_mul(u64::try_from(seat_count).unwrap_or(u64::MAX)),
    }
}
