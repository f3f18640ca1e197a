use chrono::NaiveDate;

use tripcal_calendar::{is_past, CalendarGrid, DateCell};

use crate::config::DashboardConfig;

/// Renders a calendar grid as fixed-width text.
///
/// Layout: a header row of weekday labels, a rule, then two lines per week.
/// The first line carries the day numbers (parenthesised for cells outside
/// the target month, standing in for the web dashboard's reduced opacity)
/// with the past/upcoming reservation marker; the second carries the
/// per-status badge `c<completed> f<confirmed> p<pending>` for dates that
/// have reservations.
///
/// `today` drives the past/upcoming marker only; it is injected so output
/// is a pure function of `(grid, config, today)`.
pub fn render_grid(grid: &CalendarGrid, config: &DashboardConfig, today: NaiveDate) -> String {
    let width = config.cell_width;
    let mut out = String::new();

    for label in &config.weekday_labels {
        out.push_str(&format!("{label:<width$}"));
    }
    out.push('\n');
    out.push_str(&"-".repeat(width * config.weekday_labels.len()));
    out.push('\n');

    for week in grid.weeks() {
        for cell in week {
            out.push_str(&format!("{:<width$}", day_label(cell, config, today)));
        }
        out.push('\n');
        for cell in week {
            out.push_str(&format!("{:<width$}", badge(cell)));
        }
        out.push('\n');
    }

    out
}

fn day_label(cell: &DateCell, config: &DashboardConfig, today: NaiveDate) -> String {
    let day = if cell.in_target_month() {
        format!("{:>2}", cell.day_of_month())
    } else {
        format!("({})", cell.day_of_month())
    };
    match cell.summary() {
        Some(_) if is_past(cell.date(), today) => format!("{day} {}", config.past_marker),
        Some(_) => format!("{day} {}", config.upcoming_marker),
        None => day,
    }
}

fn badge(cell: &DateCell) -> String {
    match cell.summary() {
        Some(s) => format!("c{} f{} p{}", s.completed, s.confirmed, s.pending),
        None => String::new(),
    }
}
