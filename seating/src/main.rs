//! Seat selection demo binary
//!
//! Loads the configured venue, prints the seating chart and walks through a
//! scripted selection the way a presentation layer would drive the engine.

use seat_selection::types::RowItem;
use seat_selection::{SeatId, SeatingSession, SeatingSettings, SelectionSnapshot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn rupees(amount: u64) -> String {
    format!("₹{amount}")
}

fn print_chart(session: &SeatingSession) {
    for group in session.catalog().groups() {
        println!("\n{}  [{}]", group.label, group.status_tag);
        for row in &group.rows {
            let cells: String = row
                .items
                .iter()
                .map(|item| match item {
                    RowItem::Gap(_) => "   ".to_string(),
                    RowItem::Seat(seat) if session.is_selected(&seat.id) => {
                        format!("({})", seat.label)
                    },
                    RowItem::Seat(seat) if seat.is_selectable() => format!(" {} ", seat.label),
                    RowItem::Seat(seat) => match seat.status {
                        seat_selection::SeatStatus::Blocked => " ## ".to_string(),
                        _ => " xx ".to_string(),
                    },
                })
                .collect();
            println!("  {:>3} {cells}  {} free", row.label, row.available_count());
        }
    }
}

fn print_summary(snapshot: &SelectionSnapshot) {
    let summary = &snapshot.summary;
    let seats: Vec<&str> = summary.seat_ids.iter().map(SeatId::as_str).collect();

    println!(
        "  {} of {} seat(s) selected: {}",
        summary.seat_count,
        snapshot.ticket_count,
        if seats.is_empty() {
            "-".to_string()
        } else {
            seats.join(", ")
        }
    );
    println!("  Ticket(s) price:  {}", rupees(summary.subtotal));
    println!("  Convenience fees: {}", rupees(summary.convenience_fee));
    println!("  Order total:      {}", rupees(summary.order_total));
    println!(
        "  Suggested donation (not charged): {}",
        rupees(summary.suggested_donation)
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional .env for SEATING_* settings
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seat_selection=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = SeatingSettings::from_env();
    let venue = settings.load_venue()?;
    let title = format!("{} • {} • {}", venue.title, venue.venue, venue.show_date);
    let mut session = SeatingSession::new(venue)?;

    println!("=== {title} ===");
    println!("\nShows:");
    for show in session.shows() {
        println!(
            "  {} {} {:?}",
            show.starts_at.format("%I:%M %p"),
            show.format_tag,
            show.availability
        );
    }

    let options = session.ticket_count_options();
    println!(
        "\nTicket count options: {}..={} (fee rate {})",
        options.start(),
        options.end(),
        session.pricing().fee_rate
    );

    println!("\n>>> Select show 19:00");
    session.select_show("19:00");

    println!(">>> Set ticket count to 2");
    session.set_ticket_count(2)?;

    for id in ["N09", "N10", "M01", "N01"] {
        println!(">>> Toggle {id}");
        session.toggle_seat(&SeatId::new(id));
    }

    print_chart(&session);
    println!("\nOrder summary:");
    print_summary(&session.selection_state());

    println!("\n>>> Set ticket count to 1 (drops the latest pick)");
    let snapshot = session.set_ticket_count(1)?;
    print_summary(&snapshot);

    println!("\n>>> Select show 22:10 (clears the selection)");
    let snapshot = session.select_show("22:10");
    print_summary(&snapshot);
    println!("  Ready to pay: {}", session.can_checkout());

    Ok(())
}
