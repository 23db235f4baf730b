//! Seat map builder.
//!
//! Turns the authored [`SeatGroupSpec`]s of a venue into an immutable
//! [`Catalog`]. Building is deterministic: the same specs always produce the
//! same groups, rows, seats and gaps in the same order.

use crate::classifier::classify;
use crate::error::{ConfigError, SeatListKind};
use crate::types::{Gap, Row, RowItem, Seat, SeatGroup, SeatGroupSpec, SeatId, SeatSpec};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Longest accepted row label
const MAX_ROW_LABEL_LEN: usize = 3;

/// Most seats a row may hold; keeps seat numbers at two digits
pub const MAX_SEATS_PER_ROW: u32 = 99;

/// Position of a seat inside the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SeatLocation {
    group: usize,
    row: usize,
    item: usize,
}

/// Immutable seating chart for one screen
///
/// Built once per session and shared read-only afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct Catalog {
    groups: Vec<SeatGroup>,
    #[serde(skip)]
    index: HashMap<SeatId, SeatLocation>,
}

impl Catalog {
    /// Build a catalog from seat group specifications
    ///
    /// Rows are emitted in authored order. Within a row, seats are numbered
    /// `1..=seats` and a gap follows every seat listed in `gap_after`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a group key is empty or repeated, a row
    /// label is invalid or repeated, a row has no seats or more than
    /// [`MAX_SEATS_PER_ROW`], or a sold, blocked or gap number is outside the
    /// row.
    ///
    /// Seat identifiers are a unique row label plus a two-digit number, so
    /// they never collide.
    pub fn build(specs: &[SeatGroupSpec]) -> Result<Self, ConfigError> {
        let mut group_keys = HashSet::new();
        let mut row_labels = HashSet::new();
        let mut index = HashMap::new();
        let mut groups = Vec::with_capacity(specs.len());

        for (group_idx, group_spec) in specs.iter().enumerate() {
            if group_spec.key.trim().is_empty() {
                return Err(ConfigError::EmptyGroupKey);
            }
            if !group_keys.insert(group_spec.key.as_str()) {
                return Err(ConfigError::DuplicateGroupKey(group_spec.key.clone()));
            }

            let mut rows = Vec::with_capacity(group_spec.rows.len());
            for (row_idx, row_spec) in group_spec.rows.iter().enumerate() {
                validate_row(row_spec)?;
                if !row_labels.insert(row_spec.row.as_str()) {
                    return Err(ConfigError::DuplicateRowLabel(row_spec.row.clone()));
                }

                let row = build_row(row_spec, row_spec.price.unwrap_or(group_spec.price));
                for (item_idx, item) in row.items.iter().enumerate() {
                    let RowItem::Seat(seat) = item else {
                        continue;
                    };
                    let location = SeatLocation {
                        group: group_idx,
                        row: row_idx,
                        item: item_idx,
                    };
                    index.insert(seat.id.clone(), location);
                }
                rows.push(row);
            }

            groups.push(SeatGroup {
                key: group_spec.key.clone(),
                label: group_spec.label.clone(),
                price: group_spec.price,
                status_tag: group_spec.status_tag.clone(),
                rows,
            });
        }

        let catalog = Self { groups, index };
        tracing::info!(
            groups = catalog.groups.len(),
            seats = catalog.seat_count(),
            available = catalog.total_available(),
            "Seat catalog built"
        );
        Ok(catalog)
    }

    /// Seat groups in authored order
    #[must_use]
    pub fn groups(&self) -> &[SeatGroup] {
        &self.groups
    }

    /// Look up a seat group by key
    #[must_use]
    pub fn group(&self, key: &str) -> Option<&SeatGroup> {
        self.groups.iter().find(|group| group.key == key)
    }

    /// Look up a seat by identifier
    #[must_use]
    pub fn seat(&self, id: &SeatId) -> Option<&Seat> {
        let location = self.index.get(id)?;
        self.groups
            .get(location.group)?
            .rows
            .get(location.row)?
            .items
            .get(location.item)?
            .as_seat()
    }

    /// Every seat in catalog order, gaps excluded
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.groups.iter().flat_map(SeatGroup::seats)
    }

    /// Every row in catalog order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.groups.iter().flat_map(|group| group.rows.iter())
    }

    /// Number of seats, gaps excluded
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.index.len()
    }

    /// Number of seats that can be selected
    #[must_use]
    pub fn total_available(&self) -> usize {
        self.seats().filter(|seat| seat.is_selectable()).count()
    }
}

fn validate_row(spec: &SeatSpec) -> Result<(), ConfigError> {
    let label_ok = !spec.row.is_empty()
        && spec.row.len() <= MAX_ROW_LABEL_LEN
        && spec
            .row
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if !label_ok {
        return Err(ConfigError::InvalidRowLabel(spec.row.clone()));
    }

    if spec.seats == 0 {
        return Err(ConfigError::EmptyRow {
            row: spec.row.clone(),
        });
    }
    if spec.seats > MAX_SEATS_PER_ROW {
        return Err(ConfigError::TooManySeats {
            row: spec.row.clone(),
            seats: spec.seats,
            max: MAX_SEATS_PER_ROW,
        });
    }

    let lists = [
        (SeatListKind::Sold, &spec.sold),
        (SeatListKind::Blocked, &spec.blocked),
        (SeatListKind::GapAfter, &spec.gap_after),
    ];
    for (kind, numbers) in lists {
        if let Some(&seat) = numbers.iter().find(|&&n| n == 0 || n > spec.seats) {
            return Err(ConfigError::SeatOutOfRange {
                row: spec.row.clone(),
                kind,
                seat,
                seats: spec.seats,
            });
        }
    }

    let overlap: Vec<u32> = spec.sold.intersection(&spec.blocked).copied().collect();
    if !overlap.is_empty() {
        tracing::warn!(
            row = %spec.row,
            seats = ?overlap,
            "Seats listed as both sold and blocked; reporting them as blocked"
        );
    }

    Ok(())
}

fn build_row(spec: &SeatSpec, price: u64) -> Row {
    let mut items = Vec::with_capacity(spec.seats as usize + spec.gap_after.len());

    for number in 1..=spec.seats {
        let id = SeatId::from_parts(&spec.row, number);
        let gap = spec.gap_after.contains(&number).then(|| Gap {
            id: format!("{id}-gap"),
        });

        items.push(RowItem::Seat(Seat {
            id,
            row: spec.row.clone(),
            number,
            label: format!("{number:02}"),
            status: classify(number, &spec.sold, &spec.blocked),
            price,
        }));

        if let Some(gap) = gap {
            items.push(RowItem::Gap(gap));
        }
    }

    Row {
        label: spec.row.clone(),
        items,
    }
}
