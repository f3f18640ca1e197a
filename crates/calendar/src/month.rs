//! Month arithmetic for grid construction.
//!
//! Previous/next month are computed with explicit wraparound rather than
//! date-arithmetic overflow, so December/January transitions carry the year
//! change visibly.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Validates a month number, returning it unchanged.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub(crate) fn check_month(month: u32) -> Result<u32, CalendarError> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}

/// Constructs a date, mapping an impossible combination to [`CalendarError`].
pub(crate) fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Returns the number of days in the given month, leap years included.
///
/// # Errors
///
/// Returns [`CalendarError`] if `month` is outside 1..=12 or the year is
/// outside the supported date range.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    check_month(month)?;
    let (next_year, next_month) = next_month(year, month)?;
    let first_of_next = date(next_year, next_month, 1)?;
    let last = first_of_next
        .pred_opt()
        .expect("the first of a month always has a predecessor");
    Ok(last.day())
}

/// Returns `(year, month)` of the month before the given one.
///
/// January wraps backward to December of the previous year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn previous_month(year: i32, month: u32) -> Result<(i32, u32), CalendarError> {
    check_month(month)?;
    if month == 1 {
        Ok((year - 1, 12))
    } else {
        Ok((year, month - 1))
    }
}

/// Returns `(year, month)` of the month after the given one.
///
/// December wraps forward to January of the following year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn next_month(year: i32, month: u32) -> Result<(i32, u32), CalendarError> {
    check_month(month)?;
    if month == 12 {
        Ok((year + 1, 1))
    } else {
        Ok((year, month + 1))
    }
}

/// Returns the Sunday-based weekday column (0..=6) of day 1 of the month.
///
/// Column 0 is Sunday, column 6 is Saturday.
///
/// # Errors
///
/// Returns [`CalendarError`] if `month` is outside 1..=12 or the year is
/// outside the supported date range.
pub fn first_weekday_column(year: i32, month: u32) -> Result<u32, CalendarError> {
    check_month(month)?;
    let first = date(year, month, 1)?;
    Ok(first.weekday().num_days_from_sunday())
}
