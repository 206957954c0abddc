//! Host locale lookup: abbreviated weekday names and first day of the week.
//!
//! The rest of the crate only sees a [`LocaleInfo`], so the grid and the
//! renderer can be exercised without touching the environment.

use chrono::{Locale, NaiveDate};
use tracing::debug;

use crate::types::{SATURDAY, SUNDAY};

/// Territories whose week starts on Sunday (CLDR week data).
const SUNDAY_FIRST: &[&str] = &[
    "AG", "AS", "BD", "BR", "BS", "BT", "BW", "BZ", "CA", "CN", "CO", "DM", "DO", "ET", "GT", "GU",
    "HK", "HN", "ID", "IL", "IN", "JM", "JP", "KE", "KH", "KR", "LA", "MH", "MM", "MO", "MT", "MX",
    "MZ", "NI", "NP", "PA", "PE", "PH", "PK", "PR", "PT", "PY", "SA", "SG", "SV", "TH", "TT", "TW",
    "UM", "US", "VE", "VI", "WS", "YE", "ZA", "ZW",
];

/// Territories whose week starts on Saturday.
const SATURDAY_FIRST: &[&str] = &[
    "AE", "AF", "BH", "DJ", "DZ", "EG", "IQ", "IR", "JO", "KW", "LY", "OM", "QA", "SD", "SY",
];

/// Territories whose week starts on Friday.
const FRIDAY_FIRST: &[&str] = &["MV"];

/// Locale-dependent values the calendar needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleInfo {
    first_day_of_week: u32,
    /// Abbreviated names, Sunday first.
    weekday_names: [String; 7],
}

impl LocaleInfo {
    /// Out-of-range `first_day_of_week` falls back to Sunday.
    pub fn new(first_day_of_week: u32, weekday_names: [String; 7]) -> Self {
        let first_day_of_week = if (SUNDAY..=SATURDAY).contains(&first_day_of_week) {
            first_day_of_week
        } else {
            SUNDAY
        };
        LocaleInfo {
            first_day_of_week,
            weekday_names,
        }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        let name = get_system_locale_name();
        Self::from_locale_name(name.as_deref())
    }

    /// Resolve from a locale name such as `de_DE.UTF-8` or `C`.
    pub fn from_locale_name(name: Option<&str>) -> Self {
        let base = name.map(strip_locale_name).unwrap_or("C");
        let Ok(locale) = Locale::try_from(base) else {
            debug!(locale = base, "unknown locale, using POSIX defaults");
            return LocaleInfo::default();
        };
        let first_day_of_week = first_day_of_week_for(base);
        debug!(locale = base, first_day_of_week, "resolved locale");

        LocaleInfo::new(first_day_of_week, weekday_names(locale))
    }

    /// 1 (Sunday)..=7 (Saturday).
    pub fn first_day_of_week(&self) -> u32 {
        self.first_day_of_week
    }

    /// Abbreviated name for weekday `n` (1 = Sunday); empty outside 1..=7.
    pub fn weekday_name(&self, n: u32) -> &str {
        match n {
            1..=7 => &self.weekday_names[(n - 1) as usize],
            _ => "",
        }
    }
}

impl Default for LocaleInfo {
    fn default() -> Self {
        LocaleInfo::new(SUNDAY, weekday_names(Locale::POSIX))
    }
}

/// Get system locale name from environment (LC_ALL > LC_TIME > LANG).
pub fn get_system_locale_name() -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
}

/// Drop the codeset and modifier: `sr_RS.UTF-8@latin` -> `sr_RS`.
fn strip_locale_name(name: &str) -> &str {
    name.split(['.', '@']).next().unwrap_or(name)
}

/// First day of week from the territory part of a locale name.
pub fn first_day_of_week_for(locale_name: &str) -> u32 {
    let Some((_, territory)) = locale_name.split_once('_') else {
        return SUNDAY;
    };
    if SUNDAY_FIRST.contains(&territory) {
        SUNDAY
    } else if SATURDAY_FIRST.contains(&territory) {
        SATURDAY
    } else if FRIDAY_FIRST.contains(&territory) {
        6
    } else if territory.len() == 2 && territory.bytes().all(|b| b.is_ascii_uppercase()) {
        2
    } else {
        SUNDAY
    }
}

/// Abbreviated weekday names for `locale`, Sunday first.
pub fn weekday_names(locale: Locale) -> [String; 7] {
    // 2000-01-02 was a Sunday
    std::array::from_fn(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 2 + offset as u32)
            .map(|date| date.format_localized("%a", locale).to_string())
            .unwrap_or_default()
    })
}
