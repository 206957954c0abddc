//! Locale-aware month calendar for the terminal.
//!
//! Features:
//! - Weekday names and first day of week from the host locale
//! - Julian/Gregorian arithmetic with the September 1752 changeover
//! - Today's date bracketed in the grid

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod logging;
pub mod types;
