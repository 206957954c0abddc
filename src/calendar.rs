//! Calendar calculation: weekday arithmetic and the 6×7 day grid.
//!
//! The weekday arithmetic is the `cal` lineage hybrid: Julian before the
//! 1752 changeover, Gregorian after, with the September 1752 gap.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::types::{
    CELL_SIZE, DAYS_A_WEEK, LEFT_DAYSELECT, MonthLengths, REFORM_FIRST_DAY, REFORM_MONTH_SLOTS,
    REFORM_SKIPPED_DAYS, REFORM_YEAR_GB, RIGHT_DAYSELECT, Request, WEEKS_PER_MONTH, YearKind,
};

/// Grid column (0-based from `first_day_of_week`) of January 1 of `year`.
pub fn first_day_of_year(year: i32, first_day_of_week: u32) -> u32 {
    // One extra day every 4 years
    let mut d = 5 - first_day_of_week as i32 + year + (year + 3) / 4;

    // Three fewer leap days every 400 years
    if year > 1800 {
        d -= (year - 1701) / 100;
        d += (year - 1601) / 400;
    }

    // The changeover shifted every later year by 11 days
    if year > REFORM_YEAR_GB {
        d += 3;
    }

    d.rem_euclid(7) as u32
}

/// Classify `year` by how far January 1 moves to the next year.
///
/// A shift of 1 is a common year and 2 a leap year. Any other shift is
/// treated as the 1752 changeover; only 1752 produces one for years 1..=9998.
pub fn year_kind(year: i32) -> YearKind {
    let this = first_day_of_year(year, 1);
    let next = first_day_of_year(year + 1, 1);
    match (next + 7 - this) % 7 {
        1 => YearKind::Common,
        2 => YearKind::Leap,
        _ => YearKind::Reform,
    }
}

impl YearKind {
    /// Month lengths for a year of this kind.
    pub fn month_lengths(self) -> MonthLengths {
        let mut lengths = [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        match self {
            YearKind::Common => lengths[2] = 28,
            YearKind::Leap => {}
            YearKind::Reform => lengths[9] = REFORM_MONTH_SLOTS,
        }
        MonthLengths::new(lengths)
    }
}

/// Grid column of the 1st of `month`.
pub fn first_column_of_month(month: u32, year: i32, first_day_of_week: u32) -> u32 {
    let lengths = year_kind(year).month_lengths();
    (first_day_of_year(year, first_day_of_week) + lengths.days_before(month)) % 7
}

/// Weekday number (1 = Sunday) shown in grid column `column`.
pub fn weekday_at_column(first_day_of_week: u32, column: usize) -> u32 {
    (first_day_of_week + 6 + column as u32) % 7 + 1
}

/// Day numbers shown for `month`, in order.
///
/// In the changeover month the numbering jumps from 2 straight to 14.
pub fn displayed_days(month: u32, lengths: &MonthLengths) -> impl Iterator<Item = u32> {
    let gap = lengths.has_reform_gap(month);
    (1..=lengths.get(month)).map(move |slot| {
        if gap && slot >= REFORM_FIRST_DAY {
            slot + REFORM_SKIPPED_DAYS
        } else {
            slot
        }
    })
}

/// Day of the requested month to bracket, if `today` falls in it.
pub fn today_marker(today: NaiveDate, year: i32, month: u32) -> Option<u32> {
    (today.year() == year && today.month() == month).then(|| today.day())
}

/// One filled grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub today: bool,
}

impl DayCell {
    /// Fixed-width text: digits in positions 1-2, brackets hugging the digits.
    ///
    /// `"  5 "`, `" 15 "`, `" [5]"`, `"[15]"`.
    pub fn text(&self) -> [char; CELL_SIZE] {
        let mut cell = [' '; CELL_SIZE];
        let ones = char::from_digit(self.day % 10, 10).unwrap_or(' ');
        cell[2] = ones;
        if self.day >= 10 {
            cell[1] = char::from_digit(self.day / 10 % 10, 10).unwrap_or(' ');
        }
        if self.today {
            let left = if self.day >= 10 { 0 } else { 1 };
            cell[left] = LEFT_DAYSELECT;
            cell[3] = RIGHT_DAYSELECT;
        }
        cell
    }
}

/// Six weeks of seven cells, addressed by `(week, column)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid {
    first_day_of_week: u32,
    cells: [[Option<DayCell>; DAYS_A_WEEK]; WEEKS_PER_MONTH],
}

impl DayGrid {
    fn new(first_day_of_week: u32) -> Self {
        DayGrid {
            first_day_of_week,
            cells: Default::default(),
        }
    }

    /// Weekday (1 = Sunday) of column 0.
    pub fn first_day_of_week(&self) -> u32 {
        self.first_day_of_week
    }

    pub fn get(&self, week: usize, column: usize) -> Option<DayCell> {
        self.cells
            .get(week)
            .and_then(|row| row.get(column))
            .copied()
            .flatten()
    }

    /// Cells of one week; empty for weeks past the grid.
    pub fn week(&self, week: usize) -> &[Option<DayCell>] {
        self.cells.get(week).map(|row| &row[..]).unwrap_or(&[])
    }

    /// All filled cells in display order.
    pub fn days(&self) -> impl Iterator<Item = DayCell> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    /// `(week, column)` of the cell showing `day`.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(week, row)| {
            row.iter()
                .position(|cell| cell.is_some_and(|c| c.day == day))
                .map(|column| (week, column))
        })
    }

    fn set(&mut self, week: usize, column: usize, cell: DayCell) {
        if let Some(slot) = self.cells.get_mut(week).and_then(|row| row.get_mut(column)) {
            *slot = Some(cell);
        }
    }
}

/// Lay out the requested month.
pub fn compute_grid(request: &Request, today: Option<u32>) -> DayGrid {
    let lengths = year_kind(request.year).month_lengths();
    let mut column =
        first_column_of_month(request.month, request.year, request.first_day_of_week) as usize;
    let mut week = 0;
    let mut grid = DayGrid::new(request.first_day_of_week);

    trace!(
        month = request.month,
        year = request.year,
        column,
        slots = lengths.get(request.month),
        "laying out month"
    );

    for day in displayed_days(request.month, &lengths) {
        grid.set(
            week,
            column,
            DayCell {
                day,
                today: today == Some(day),
            },
        );
        column += 1;
        if column == DAYS_A_WEEK {
            column = 0;
            week += 1;
        }
    }

    grid
}
