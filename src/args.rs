//! Command-line argument parsing using clap.
//!
//! The only positional form is a single `month.year` token.

use std::io::IsTerminal;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Datelike, Local, NaiveDate, TimeZone};
use clap::{ArgAction, Parser, ValueHint};
use tracing::debug;

use crate::calendar::today_marker;
use crate::error::CalError;
use crate::locale::LocaleInfo;
use crate::types::{COLOR_ENABLED_BY_DEFAULT, CalContext, Request};

/// Overrides today's date (`YYYY-MM-DD`), for tests.
pub const TEST_TIME_VAR: &str = "LOCALE_CAL_TEST_TIME";

#[derive(Parser, Debug)]
#[command(name = "locale-cal")]
#[command(about = "Displays a calendar for the current or the given month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Month and year separated by a dot, e.g. 02.2014.
    #[arg(
        value_name = "month.year",
        value_hint = ValueHint::Other,
        allow_negative_numbers = true
    )]
    pub dates: Vec<String>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Without any arguments, display the current month.

Weekday names and the first day of the week follow LC_ALL, LC_TIME or LANG.

Examples:
  locale-cal           Display current month
  locale-cal 02.2014   Display February 2014
  locale-cal 9.1752    Display September 1752";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl CalContext {
    pub fn new(args: &Args) -> Result<Self, CalError> {
        let today = get_today_date()?;
        let locale = LocaleInfo::from_env();
        let request = parse_request(&args.dates, today, locale.first_day_of_week())?;

        let color = use_color(std::io::stdout().is_terminal());

        Ok(CalContext {
            request,
            today: today_marker(today, request.year, request.month),
            locale,
            color,
        })
    }
}

/// Color needs the `color` feature and a terminal on stdout.
pub fn use_color(stdout_is_terminal: bool) -> bool {
    COLOR_ENABLED_BY_DEFAULT && stdout_is_terminal
}

/// Get today's date, respecting the test override variable.
pub fn get_today_date() -> Result<NaiveDate, CalError> {
    if let Ok(test_time) = std::env::var(TEST_TIME_VAR)
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        debug!(%date, "using overridden date");
        return Ok(date);
    }

    local_date(SystemTime::now())
}

/// Local calendar date of `now`.
pub fn local_date(now: SystemTime) -> Result<NaiveDate, CalError> {
    let since_epoch = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| CalError::ClockUnavailable)?;
    let secs = i64::try_from(since_epoch.as_secs()).map_err(|_| CalError::ClockUnavailable)?;
    local_date_from_timestamp(secs)
}

/// Local calendar date of a Unix timestamp in seconds.
pub fn local_date_from_timestamp(secs: i64) -> Result<NaiveDate, CalError> {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(|now| now.date_naive())
        .ok_or(CalError::ClockUnavailable)
}

/// Build the request from the positional tokens.
///
/// - no token: today's month and year
/// - one token: `month.year`
/// - anything else: usage error
pub fn parse_request(
    dates: &[String],
    today: NaiveDate,
    first_day_of_week: u32,
) -> Result<Request, CalError> {
    match dates {
        [] => Request::new(
            i64::from(today.month()),
            i64::from(today.year()),
            first_day_of_week,
        ),
        [token] => {
            let (month, year) = split_month_year(token)?;
            Request::new(month, year, first_day_of_week)
        }
        _ => Err(CalError::Usage),
    }
}

/// Split `month.year` into raw integers. Empty fields are skipped, so
/// `.2014` and `02.` are both missing a field.
pub fn split_month_year(token: &str) -> Result<(i64, i64), CalError> {
    let mut fields = token.split('.').filter(|field| !field.is_empty());
    let (Some(month), Some(year)) = (fields.next(), fields.next()) else {
        return Err(CalError::Usage);
    };
    Ok((parse_leading_int(month), parse_leading_int(year)))
}

/// Leading decimal integer of `s`; 0 when there is none.
pub fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let value = digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
    if negative { -value } else { value }
}
