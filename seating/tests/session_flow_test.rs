//! Integration tests for `SeatingSession` over the bundled venue
//!
//! These drive the engine the way a presentation layer does: read the
//! catalog, send intents, re-read the snapshot.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use seat_selection::types::RowItem;
use seat_selection::{
    ConfigError, FeeRate, PricingPolicy, SeatId, SeatStatus, SeatingSession, SelectionSnapshot,
    VenueConfig,
};

fn session() -> SeatingSession {
    cinema_seating_testing::init_test_tracing();
    SeatingSession::new(VenueConfig::bundled().expect("bundled venue parses"))
        .expect("bundled venue builds")
}

fn ids(snapshot: &SelectionSnapshot) -> Vec<&str> {
    snapshot.selected.iter().map(|s| s.id.as_str()).collect()
}

#[test]
fn recliner_row_matches_layout() {
    let session = session();
    let recliner = session.catalog().group("recliner").unwrap();
    let row = &recliner.rows[0];

    assert_eq!(recliner.status_tag, "Filling fast");
    for number in 1..=6 {
        let id = SeatId::from_parts("N", number);
        assert_eq!(session.catalog().seat(&id).unwrap().status, SeatStatus::Sold);
    }
    for id in ["N07", "N08"] {
        assert_eq!(
            session.catalog().seat(&SeatId::new(id)).unwrap().status,
            SeatStatus::Blocked
        );
    }
    for id in ["N09", "N10"] {
        assert_eq!(
            session.catalog().seat(&SeatId::new(id)).unwrap().status,
            SeatStatus::Available
        );
    }

    let gap_position = row.items.iter().position(RowItem::is_gap).unwrap();
    assert_eq!(row.items[gap_position - 1].as_seat().unwrap().id.as_str(), "N05");
    assert_eq!(row.items[gap_position + 1].as_seat().unwrap().id.as_str(), "N06");
}

#[test]
fn catalog_counts_and_ticket_options() {
    let session = session();

    assert_eq!(session.catalog().seat_count(), 226);
    assert_eq!(session.catalog().total_available(), 196);
    assert_eq!(session.ticket_count_options(), 1..=196);
}

#[test]
fn rows_keep_authored_order() {
    let session = session();
    let labels: Vec<&str> = session
        .catalog()
        .rows()
        .map(|row| row.label.as_str())
        .collect();

    assert_eq!(
        labels,
        vec!["N", "M", "L", "K", "J", "H", "G", "F", "E", "D", "C", "B", "A"]
    );
}

#[test]
fn toggle_example_from_two_tickets() {
    let mut session = session();

    session.toggle_seat(&SeatId::new("N09"));
    let snapshot = session.toggle_seat(&SeatId::new("N10"));
    assert_eq!(ids(&snapshot), vec!["N09", "N10"]);

    let snapshot = session.toggle_seat(&SeatId::new("N09"));
    assert_eq!(ids(&snapshot), vec!["N10"]);
}

#[test]
fn full_selection_ignores_new_seats() {
    let mut session = session();
    session.toggle_seat(&SeatId::new("H01"));
    session.toggle_seat(&SeatId::new("H02"));

    let snapshot = session.toggle_seat(&SeatId::new("H03"));

    assert_eq!(ids(&snapshot), vec!["H01", "H02"]);
}

#[test]
fn unavailable_and_unknown_seats_are_ignored() {
    let mut session = session();
    let before = session.toggle_seat(&SeatId::new("G05"));

    for id in ["N01", "N07", "M08", "A18", "Q01", "N05-gap"] {
        assert_eq!(session.toggle_seat(&SeatId::new(id)), before);
    }
}

#[test]
fn two_recliners_price_out() {
    let mut session = session();
    session.toggle_seat(&SeatId::new("N09"));
    let snapshot = session.toggle_seat(&SeatId::new("N10"));

    assert_eq!(snapshot.summary.subtotal, 720);
    assert_eq!(snapshot.summary.convenience_fee, 111);
    assert_eq!(snapshot.summary.order_total, 831);
    assert!(session.can_checkout());
}

#[test]
fn summary_mixes_tiers_in_pick_order() {
    let mut session = session();
    session.set_ticket_count(3).unwrap();
    session.toggle_seat(&SeatId::new("A01"));
    session.toggle_seat(&SeatId::new("N10"));
    let snapshot = session.toggle_seat(&SeatId::new("F09"));

    let summary = &snapshot.summary;
    let seat_ids: Vec<&str> = summary.seat_ids.iter().map(SeatId::as_str).collect();
    assert_eq!(seat_ids, vec!["A01", "N10", "F09"]);
    // 160 + 360 + 180 = 700; 700 * 0.154 = 107.8 -> 108
    assert_eq!(summary.seat_count, 3);
    assert_eq!(summary.subtotal, 700);
    assert_eq!(summary.convenience_fee, 108);
    assert_eq!(summary.order_total, 808);
    assert_eq!(summary.suggested_donation, 3);
}

#[test]
fn shrinking_cap_keeps_earliest_picks() {
    let mut session = session();
    session.set_ticket_count(4).unwrap();
    for id in ["G10", "G01", "F05", "E09"] {
        session.toggle_seat(&SeatId::new(id));
    }

    let snapshot = session.set_ticket_count(2).unwrap();

    assert_eq!(snapshot.ticket_count, 2);
    assert_eq!(ids(&snapshot), vec!["G10", "G01"]);
}

#[test]
fn zero_cap_is_a_config_error() {
    let mut session = session();

    assert_eq!(
        session.set_ticket_count(0).unwrap_err(),
        ConfigError::InvalidTicketCount(0)
    );
    assert_eq!(session.selection_state().ticket_count, 2);
}

#[test]
fn show_change_clears_selection_and_keeps_cap() {
    let mut session = session();
    session.set_ticket_count(3).unwrap();
    session.toggle_seat(&SeatId::new("N09"));

    let snapshot = session.select_show("13:40");

    assert!(snapshot.selected.is_empty());
    assert_eq!(snapshot.ticket_count, 3);
    assert_eq!(snapshot.summary.seat_count, 0);
    assert_eq!(snapshot.summary.order_total, 0);
    assert_eq!(session.active_show().unwrap().id, "13:40");
}

#[test]
fn reselecting_active_show_still_resets() {
    let mut session = session();
    session.toggle_seat(&SeatId::new("N09"));

    let snapshot = session.select_show("10:25");

    assert!(snapshot.selected.is_empty());
}

#[test]
fn unknown_show_keeps_everything() {
    let mut session = session();
    let before = session.toggle_seat(&SeatId::new("N09"));

    assert_eq!(session.select_show("23:59"), before);
    assert_eq!(session.active_show().unwrap().id, "10:25");
}

#[test]
fn explicit_reset_clears_selection() {
    let mut session = session();
    session.toggle_seat(&SeatId::new("N09"));

    let snapshot = session.reset_selection();

    assert!(snapshot.selected.is_empty());
    assert!(!session.can_checkout());
}

#[test]
fn custom_pricing_flows_into_summary() {
    let mut venue = VenueConfig::bundled().unwrap();
    venue.pricing = PricingPolicy {
        fee_rate: FeeRate::from_basis_points(1_000),
        donation_per_ticket: 2,
    };
    let mut session = SeatingSession::new(venue).unwrap();

    let snapshot = session.toggle_seat(&SeatId::new("A01"));

    assert_eq!(snapshot.summary.convenience_fee, 16);
    assert_eq!(snapshot.summary.order_total, 176);
    assert_eq!(snapshot.summary.suggested_donation, 2);
}

#[test]
fn venue_without_shows_has_no_active_show() {
    let mut venue = VenueConfig::bundled().unwrap();
    venue.shows.clear();
    let mut session = SeatingSession::new(venue).unwrap();

    assert!(session.active_show().is_none());
    session.toggle_seat(&SeatId::new("N09"));
    assert!(!session.select_show("10:25").selected.is_empty());
}

#[test]
fn oversized_row_is_rejected_before_building() {
    let mut venue = VenueConfig::bundled().unwrap();
    venue.groups[0].rows[0].seats = u32::MAX;

    assert_eq!(
        SeatingSession::new(venue).unwrap_err(),
        ConfigError::TooManySeats {
            row: "N".to_string(),
            seats: u32::MAX,
            max: 99,
        }
    );
}
