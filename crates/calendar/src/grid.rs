//! Fixed 6x7 month grid construction.

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::month::{date, days_in_month, first_weekday_column, next_month, previous_month};
use crate::status::{ReservationIndex, StatusSummary};

/// Number of week rows in every grid.
pub const WEEKS_PER_GRID: usize = 6;

/// Number of day columns in every week row. Column 0 is Sunday.
pub const DAYS_PER_WEEK: usize = 7;

/// Total cell count of every grid.
pub const CELLS_PER_GRID: usize = WEEKS_PER_GRID * DAYS_PER_WEEK;

/// One day cell of the dashboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCell {
    date: NaiveDate,
    day_of_month: u32,
    in_target_month: bool,
    summary: Option<StatusSummary>,
}

impl DateCell {
    /// Returns the calendar date of this cell.
    pub fn date(self) -> NaiveDate {
        self.date
    }

    /// Returns the day number to display (1..=31).
    pub fn day_of_month(self) -> u32 {
        self.day_of_month
    }

    /// Returns `true` only for dates belonging to the target month.
    pub fn in_target_month(self) -> bool {
        self.in_target_month
    }

    /// Returns the reservation summary, present only if at least one
    /// reservation exists on this date.
    pub fn summary(self) -> Option<StatusSummary> {
        self.summary
    }
}

/// A 6-week by 7-day calendar grid for one target month.
///
/// Cells are stored row-major in strictly increasing chronological order,
/// one calendar day apart, with leading and trailing cells borrowed from
/// the adjacent months to fill complete weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    year: i32,
    month: u32,
    cells: Vec<DateCell>,
}

impl CalendarGrid {
    /// Returns the target year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the target month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns all 42 cells in row-major order.
    pub fn cells(&self) -> &[DateCell] {
        &self.cells
    }

    /// Iterates over the 6 week rows, each a slice of 7 cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[DateCell]> {
        self.cells.chunks_exact(DAYS_PER_WEEK)
    }

    /// Returns the cell at `(row, col)`, or `None` if out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&DateCell> {
        if row < WEEKS_PER_GRID && col < DAYS_PER_WEEK {
            self.cells.get(row * DAYS_PER_WEEK + col)
        } else {
            None
        }
    }
}

/// Builds the 6x7 grid for a target month.
///
/// Leading cells are the last days of the previous month up to the weekday
/// column of day 1; trailing cells continue into the following month (one
/// incrementing day counter) until exactly 6 weeks exist. Each cell is
/// annotated with its reservation summary from `index`, if present.
/// December/January transitions wrap the year in both directions.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12,
/// or [`CalendarError::InvalidDate`] if the year is outside the supported
/// date range.
///
/// # Example
///
/// ```ignore
/// let index = ReservationIndex::new();
/// let grid = build_grid(2024, 2, &index)?;
/// assert_eq!(grid.cells().len(), 42);
/// assert_eq!(grid.cell(0, 4).unwrap().day_of_month(), 1); // Feb 1 is a Thursday
/// ```
pub fn build_grid(
    year: i32,
    month: u32,
    index: &ReservationIndex,
) -> Result<CalendarGrid, CalendarError> {
    let lead_count = first_weekday_column(year, month)?;
    let target_days = days_in_month(year, month)?;
    let (prev_year, prev_month) = previous_month(year, month)?;
    let (next_year, next_mon) = next_month(year, month)?;
    let prev_days = days_in_month(prev_year, prev_month)?;

    let mut cells = Vec::with_capacity(CELLS_PER_GRID);

    // Leading cells: the last `lead_count` days of the previous month,
    // ascending. Empty when day 1 already sits in column 0.
    for day in (prev_days - lead_count + 1)..=prev_days {
        cells.push(make_cell(prev_year, prev_month, day, false, index)?);
    }

    for day in 1..=target_days {
        cells.push(make_cell(year, month, day, true, index)?);
    }

    // Trailing cells: a single day counter running into the next month
    // until all 6 weeks are closed.
    let mut day = 1;
    while cells.len() < CELLS_PER_GRID {
        cells.push(make_cell(next_year, next_mon, day, false, index)?);
        day += 1;
    }

    Ok(CalendarGrid { year, month, cells })
}

fn make_cell(
    year: i32,
    month: u32,
    day: u32,
    in_target_month: bool,
    index: &ReservationIndex,
) -> Result<DateCell, CalendarError> {
    let date = date(year, month, day)?;
    Ok(DateCell {
        date,
        day_of_month: day,
        in_target_month,
        summary: index.get(date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn always_42_cells() {
        let index = ReservationIndex::new();
        for month in 1..=12 {
            let grid = build_grid(2024, month, &index).unwrap();
            assert_eq!(grid.cells().len(), CELLS_PER_GRID);
            assert_eq!(grid.weeks().count(), WEEKS_PER_GRID);
        }
    }

    #[test]
    fn invalid_month_rejected() {
        let index = ReservationIndex::new();
        assert_eq!(
            build_grid(2024, 0, &index).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            build_grid(2024, 13, &index).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn first_of_month_in_weekday_column() {
        let index = ReservationIndex::new();
        // Feb 1, 2024 was a Thursday (column 4).
        let grid = build_grid(2024, 2, &index).unwrap();
        let cell = grid.cell(0, 4).unwrap();
        assert_eq!(cell.date(), d(2024, 2, 1));
        assert!(cell.in_target_month());
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_cells() {
        let index = ReservationIndex::new();
        // Sep 1, 2024 was a Sunday.
        let grid = build_grid(2024, 9, &index).unwrap();
        let first = grid.cell(0, 0).unwrap();
        assert_eq!(first.date(), d(2024, 9, 1));
        assert!(first.in_target_month());
    }

    #[test]
    fn cells_strictly_increase_by_one_day() {
        let index = ReservationIndex::new();
        let grid = build_grid(2024, 2, &index).unwrap();
        for pair in grid.cells().windows(2) {
            assert_eq!(pair[1].date(), pair[0].date().succ_opt().unwrap());
        }
    }

    #[test]
    fn target_flags_contiguous_and_exact() {
        let index = ReservationIndex::new();
        let grid = build_grid(2023, 2, &index).unwrap();
        let flags: Vec<bool> = grid.cells().iter().map(|c| c.in_target_month()).collect();
        let count = flags.iter().filter(|&&f| f).count();
        assert_eq!(count, 28);
        let first = flags.iter().position(|&f| f).unwrap();
        assert!(flags[first..first + count].iter().all(|&f| f));
    }

    #[test]
    fn day_of_month_matches_date() {
        let index = ReservationIndex::new();
        let grid = build_grid(2024, 7, &index).unwrap();
        for cell in grid.cells() {
            assert_eq!(cell.day_of_month(), chrono::Datelike::day(&cell.date()));
        }
    }

    #[test]
    fn summary_annotation_from_index() {
        let index = ReservationIndex::from_entries([
            (d(2024, 2, 14), StatusSummary::new(1, 2, 3)),
            // Leading cell from January and trailing cell from March.
            (d(2024, 1, 29), StatusSummary::new(0, 1, 0)),
            (d(2024, 3, 2), StatusSummary::new(4, 0, 0)),
        ]);
        let grid = build_grid(2024, 2, &index).unwrap();
        let by_date = |date: NaiveDate| {
            grid.cells()
                .iter()
                .find(|c| c.date() == date)
                .copied()
                .unwrap()
        };
        assert_eq!(
            by_date(d(2024, 2, 14)).summary(),
            Some(StatusSummary::new(1, 2, 3))
        );
        assert_eq!(
            by_date(d(2024, 1, 29)).summary(),
            Some(StatusSummary::new(0, 1, 0))
        );
        assert_eq!(
            by_date(d(2024, 3, 2)).summary(),
            Some(StatusSummary::new(4, 0, 0))
        );
        assert_eq!(by_date(d(2024, 2, 15)).summary(), None);
    }

    #[test]
    fn cell_out_of_bounds() {
        let index = ReservationIndex::new();
        let grid = build_grid(2024, 2, &index).unwrap();
        assert!(grid.cell(6, 0).is_none());
        assert!(grid.cell(0, 7).is_none());
        assert!(grid.cell(5, 6).is_some());
    }
}
