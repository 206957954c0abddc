//! Calendar formatting and display with localization and color support.

use unicode_width::UnicodeWidthStr;

use crate::calendar::{DayGrid, compute_grid, weekday_at_column};
use crate::locale::LocaleInfo;
use crate::types::{
    CELL_SIZE, COLOR_RED, COLOR_RESET, CalContext, DAYS_A_WEEK, SATURDAY, SUNDAY,
    WEEKS_PER_MONTH,
};

/// Weekend columns get emphasized in the header.
pub fn is_weekend(weekday: u32) -> bool {
    weekday == SUNDAY || weekday == SATURDAY
}

/// Format weekday header row with optional weekend color.
///
/// Every column but the last is padded so it spans one 4-character cell:
/// one space after odd-width names, two after even-width ones.
pub fn format_weekday_header(locale: &LocaleInfo, first_day_of_week: u32, color: bool) -> String {
    let mut result = String::from(" ");

    for column in 0..DAYS_A_WEEK {
        let weekday = weekday_at_column(first_day_of_week, column);
        let name = locale.weekday_name(weekday);

        if color && is_weekend(weekday) {
            result.push_str(&format!("{}{}{}", COLOR_RED, name, COLOR_RESET));
        } else {
            result.push_str(name);
        }

        if column + 1 < DAYS_A_WEEK {
            result.push_str(if name.width() % 2 == 0 { "  " } else { " " });
        }
    }

    result
}

/// Format one week row, blanks for empty cells, trailing blanks trimmed.
pub fn format_week(grid: &DayGrid, week: usize) -> String {
    let line: String = grid
        .week(week)
        .iter()
        .flat_map(|cell| match cell {
            Some(day) => day.text(),
            None => [' '; CELL_SIZE],
        })
        .collect();
    line.trim_end_matches(' ').to_string()
}

/// Header plus all six week rows. Columns start on the grid's first day.
pub fn format_month(grid: &DayGrid, locale: &LocaleInfo, color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(WEEKS_PER_MONTH + 1);
    lines.push(format_weekday_header(locale, grid.first_day_of_week(), color));
    lines.extend((0..WEEKS_PER_MONTH).map(|week| format_week(grid, week)));
    lines
}

/// Print the requested month.
pub fn print_month(ctx: &CalContext) {
    let grid = compute_grid(&ctx.request, ctx.today);
    for line in format_month(&grid, &ctx.locale, ctx.color) {
        println!("{}", line);
    }
}
