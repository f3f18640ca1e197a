//! Error types for the tripcal-calendar crate.

/// Error type for all fallible operations in the tripcal-calendar crate.
///
/// This enum covers validation failures for month numbers and for
/// year/month/day combinations that do not name a real Gregorian date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a year/month/day combination is not a valid date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year component of the invalid date.
        year: i32,
        /// The month component of the invalid date.
        month: u32,
        /// The day component of the invalid date.
        day: u32,
    },
}
