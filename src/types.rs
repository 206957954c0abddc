//! Type definitions and constants for calendar layout.

use crate::error::CalError;
use crate::locale::LocaleInfo;

/// A validated calendar request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    /// Month, 1..=12.
    pub month: u32,
    /// Year, 1..=9998.
    pub year: i32,
    /// First day of the week, 1 (Sunday)..=7 (Saturday), as resolved by
    /// [`LocaleInfo`].
    pub first_day_of_week: u32,
}

impl Request {
    /// Build a request, checking the month before the year.
    pub fn new(month: i64, year: i64, first_day_of_week: u32) -> Result<Self, CalError> {
        if !(1..=12).contains(&month) {
            return Err(CalError::InvalidMonth);
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalError::InvalidYear);
        }
        Ok(Request {
            month: month as u32,
            year: year as i32,
            first_day_of_week,
        })
    }
}

/// How a year's month lengths deviate from the plain table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearKind {
    /// 365 days, February has 28.
    Common,
    /// 366 days, February has 29.
    Leap,
    /// The 1752 changeover: September loses 11 days (3-13).
    Reform,
}

/// Days in each month of one particular year. Index 0 is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLengths([u32; 13]);

impl MonthLengths {
    pub fn new(lengths: [u32; 13]) -> Self {
        MonthLengths(lengths)
    }

    /// Nominal number of day slots in `month`; 0 for anything outside 1..=12.
    pub fn get(&self, month: u32) -> u32 {
        self.0.get(month as usize).copied().unwrap_or(0)
    }

    /// Whether `month` is the truncated changeover month.
    pub fn has_reform_gap(&self, month: u32) -> bool {
        month == REFORM_MONTH && self.get(month) == REFORM_MONTH_SLOTS
    }

    /// Sum of the lengths of months 1..month.
    pub fn days_before(&self, month: u32) -> u32 {
        (1..month).map(|m| self.get(m)).sum()
    }
}

/// Calendar formatting context containing all display options.
#[derive(Clone, Debug)]
pub struct CalContext {
    /// What to lay out.
    pub request: Request,
    /// Weekday names and first day of week.
    pub locale: LocaleInfo,
    /// Day of the requested month to bracket, if it is the current month.
    pub today: Option<u32>,
    /// Whether to use ANSI color codes in the header.
    pub color: bool,
}

// Constants for calendar formatting
pub const CELL_SIZE: usize = 4;
pub const DAYS_A_WEEK: usize = 7;
pub const WEEKS_PER_MONTH: usize = 6;

pub const LEFT_DAYSELECT: char = '[';
pub const RIGHT_DAYSELECT: char = ']';

pub const SUNDAY: u32 = 1;
pub const SATURDAY: u32 = 7;

pub const MIN_YEAR: i64 = 1;
pub const MAX_YEAR: i64 = 9998;

// Color is compiled in with the `color` feature
pub const COLOR_ENABLED_BY_DEFAULT: bool = cfg!(feature = "color");

// September 1752: days 3-13 never happened in Great Britain
pub const REFORM_YEAR_GB: i32 = 1752;
pub const REFORM_MONTH: u32 = 9;
pub const REFORM_FIRST_DAY: u32 = 3;
pub const REFORM_SKIPPED_DAYS: u32 = 11;
pub const REFORM_MONTH_SLOTS: u32 = 19;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_RED: &str = "\x1b[22;31m";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_checks_month_first() {
        assert_eq!(Request::new(0, 0, 1), Err(CalError::InvalidMonth));
        assert_eq!(Request::new(13, 2014, 1), Err(CalError::InvalidMonth));
        assert_eq!(Request::new(2, 0, 1), Err(CalError::InvalidYear));
        assert_eq!(Request::new(2, 9999, 1), Err(CalError::InvalidYear));
    }

    #[test]
    fn request_bounds_are_inclusive() {
        assert!(Request::new(1, 1, 1).is_ok());
        assert!(Request::new(12, 9998, 1).is_ok());
    }

    #[test]
    fn month_lengths_lookup() {
        let mut table = [0; 13];
        table[9] = REFORM_MONTH_SLOTS;
        let lengths = MonthLengths::new(table);
        assert!(lengths.has_reform_gap(9));
        assert!(!lengths.has_reform_gap(10));
        assert_eq!(lengths.get(13), 0);
    }
}
