//! Reservation status aggregates and the sparse per-date lookup index.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-date aggregate counts of reservation states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    /// Reservations already carried out.
    pub completed: u32,
    /// Reservations accepted and upcoming.
    pub confirmed: u32,
    /// Reservations awaiting a decision.
    pub pending: u32,
}

impl StatusSummary {
    /// Creates a summary from its three counts.
    pub fn new(completed: u32, confirmed: u32, pending: u32) -> Self {
        Self {
            completed,
            confirmed,
            pending,
        }
    }

    /// Returns the total reservation count across all states.
    pub fn total(self) -> u32 {
        self.completed + self.confirmed + self.pending
    }
}

/// Sparse mapping from date to its reservation summary.
///
/// Built once per grid construction so cell annotation is a hash lookup
/// rather than a scan of the feed. Inserting a date twice keeps the last
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationIndex {
    by_date: HashMap<NaiveDate, StatusSummary>,
}

impl ReservationIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from `(date, summary)` pairs. Last write wins for a
    /// duplicated date.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, StatusSummary)>,
    {
        Self {
            by_date: entries.into_iter().collect(),
        }
    }

    /// Inserts or replaces the summary for a date.
    pub fn insert(&mut self, date: NaiveDate, summary: StatusSummary) {
        self.by_date.insert(date, summary);
    }

    /// Returns the summary for a date, if any reservation exists on it.
    pub fn get(&self, date: NaiveDate) -> Option<StatusSummary> {
        self.by_date.get(&date).copied()
    }

    /// Returns the number of dates carrying reservations.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Returns `true` if no date carries a reservation.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
