use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::info;

use tripcal_calendar::{days_in_month, StatusSummary};
use tripcal_feed::{read_feed, DayReservations};

use crate::cli::SummaryArgs;

/// Run the `summary` subcommand.
pub fn run(args: SummaryArgs) -> Result<()> {
    // Validates the month before touching the feed.
    days_in_month(args.year, args.month)
        .with_context(|| format!("invalid target month {}-{:02}", args.year, args.month))?;

    info!(path = %args.feed.display(), "reading reservation feed");
    let entries = read_feed(&args.feed)?;
    info!(n_entries = entries.len(), "feed loaded");

    let (n_dates, totals) = month_totals(&entries, args.year, args.month);

    println!(
        "{}-{:02}: {} date(s) with reservations",
        args.year, args.month, n_dates
    );
    println!("  completed: {}", totals.completed);
    println!("  confirmed: {}", totals.confirmed);
    println!("  pending:   {}", totals.pending);
    println!("  total:     {}", totals.total());
    Ok(())
}

/// Sums per-status counts over the feed entries falling in the target month.
fn month_totals(entries: &[DayReservations], year: i32, month: u32) -> (usize, StatusSummary) {
    let mut n_dates = 0;
    let mut totals = StatusSummary::default();
    for entry in entries {
        if entry.date.year() == year && entry.date.month() == month {
            n_dates += 1;
            totals.completed += entry.reservations.completed;
            totals.confirmed += entry.reservations.confirmed;
            totals.pending += entry.reservations.pending;
        }
    }
    (n_dates, totals)
}
