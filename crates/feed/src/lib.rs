//! # tripcal-feed
//!
//! Ingestion of the reservation dashboard feed.
//!
//! The dashboard data source serves one JSON array per month, one entry per
//! date that has at least one reservation:
//!
//! ```json
//! [
//!   { "date": "2024-08-05", "reservations": { "completed": 2, "confirmed": 1, "pending": 0 } }
//! ]
//! ```
//!
//! `read_feed` loads such a file; `build_index` turns the entries into the
//! [`ReservationIndex`] consumed by grid construction.

mod error;

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tripcal_calendar::{ReservationIndex, StatusSummary};

pub use error::FeedError;

/// One feed entry: a date and its aggregate reservation counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReservations {
    /// The date the counts apply to, in "YYYY-MM-DD" form on the wire.
    pub date: NaiveDate,
    /// Aggregate counts per reservation state.
    pub reservations: StatusSummary,
}

/// Parses a feed JSON document.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] if the document is not a valid feed array
/// (including malformed date strings).
pub fn parse_feed(json: &str) -> Result<Vec<DayReservations>, FeedError> {
    serde_json::from_str(json).map_err(|source| FeedError::Parse { source })
}

/// Reads and parses a feed file.
///
/// # Errors
///
/// Returns [`FeedError::Read`] if the file cannot be read and
/// [`FeedError::Parse`] if its content is not a valid feed array.
pub fn read_feed(path: &Path) -> Result<Vec<DayReservations>, FeedError> {
    let json = fs::read_to_string(path).map_err(|source| FeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_feed(&json)
}

/// Builds the per-date lookup index from feed entries.
///
/// A date appearing more than once keeps its last entry.
pub fn build_index(entries: &[DayReservations]) -> ReservationIndex {
    ReservationIndex::from_entries(entries.iter().map(|e| (e.date, e.reservations)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn parse_single_entry() {
        let json = r#"[
            { "date": "2024-08-05", "reservations": { "completed": 2, "confirmed": 1, "pending": 0 } }
        ]"#;
        let entries = parse_feed(json).unwrap();
        assert_eq!(
            entries,
            vec![DayReservations {
                date: d(2024, 8, 5),
                reservations: StatusSummary::new(2, 1, 0),
            }]
        );
    }

    #[test]
    fn parse_empty_array() {
        assert_eq!(parse_feed("[]").unwrap(), vec![]);
    }

    #[test]
    fn parse_rejects_malformed_date() {
        let json = r#"[
            { "date": "2024-13-40", "reservations": { "completed": 0, "confirmed": 0, "pending": 1 } }
        ]"#;
        assert!(matches!(
            parse_feed(json).unwrap_err(),
            FeedError::Parse { .. }
        ));
    }

    #[test]
    fn parse_rejects_missing_field() {
        let json = r#"[ { "date": "2024-08-05" } ]"#;
        assert!(matches!(
            parse_feed(json).unwrap_err(),
            FeedError::Parse { .. }
        ));
    }

    #[test]
    fn index_duplicate_date_keeps_last_entry() {
        let entries = vec![
            DayReservations {
                date: d(2024, 8, 5),
                reservations: StatusSummary::new(1, 0, 0),
            },
            DayReservations {
                date: d(2024, 8, 5),
                reservations: StatusSummary::new(0, 4, 2),
            },
        ];
        let index = build_index(&entries);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(d(2024, 8, 5)), Some(StatusSummary::new(0, 4, 2)));
    }

    #[test]
    fn read_feed_missing_file() {
        let err = read_feed(Path::new("/nonexistent/august.json")).unwrap_err();
        assert!(matches!(err, FeedError::Read { .. }));
    }

    #[test]
    fn serde_round_trip_keeps_wire_date_format() {
        let entry = DayReservations {
            date: d(2024, 12, 31),
            reservations: StatusSummary::new(0, 1, 2),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""date":"2024-12-31""#));
        let back: DayReservations = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
