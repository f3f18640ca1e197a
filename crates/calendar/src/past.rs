//! Past-date predicate for the dashboard's reservation indicator.

use chrono::NaiveDate;

/// Returns `true` iff `date` is strictly before `today`.
///
/// Both arguments are plain calendar dates, so the comparison is against
/// the start of the current day: today itself is never "past". `today` is
/// injected by the caller rather than read from the ambient clock, which
/// keeps the indicator a pure function of `(date, today)`.
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}
