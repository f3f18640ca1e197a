//! # tripcal-calendar
//!
//! Pure month-grid construction for the reservation dashboard.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(date, StatusSummary) pairs"] -->|"ReservationIndex::from_entries"| B["ReservationIndex"]
//!     B -->|"build_grid(year, month)"| C["CalendarGrid (6 x 7 DateCell)"]
//!     C -->|".weeks() / .cell()"| D["renderer"]
//!     C -->|"is_past(date, today)"| E["past indicator"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use tripcal_calendar::{build_grid, ReservationIndex, StatusSummary};
//!
//! let index = ReservationIndex::from_entries([(
//!     NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
//!     StatusSummary::new(1, 2, 0),
//! )]);
//!
//! let grid = build_grid(2024, 2, &index)?;
//! assert_eq!(grid.cells().len(), 42);
//! // Feb 1, 2024 is a Thursday: row 0, column 4.
//! assert_eq!(grid.cell(0, 4).unwrap().day_of_month(), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month lengths, explicit previous/next wraparound, weekday columns |
//! | `status` | Status summaries and the sparse per-date index |
//! | `grid` | 6x7 grid construction |
//! | `past` | Past-date predicate with injected "today" |
//! | `error` | Error types |

mod error;
mod grid;
mod month;
mod past;
mod status;

pub use error::CalendarError;
pub use grid::{build_grid, CalendarGrid, DateCell, CELLS_PER_GRID, DAYS_PER_WEEK, WEEKS_PER_GRID};
pub use month::{days_in_month, first_weekday_column, next_month, previous_month};
pub use past::is_past;
pub use status::{ReservationIndex, StatusSummary};
