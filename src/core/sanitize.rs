//! Sanitizing input filter for free-text time fields and edit dates.

use crate::utils::{date, formats};
use chrono::NaiveDate;

/// Drop every character outside `[0-9:APM\s]`, then keep at most 8
/// characters. Safe to apply any number of times.
pub fn time_input(raw: &str) -> String {
    formats::strip_time_input(raw)
        .chars()
        .take(formats::TIME_INPUT_MAX_CHARS)
        .collect()
}

/// Strict date check plus the one-year-either-side window around `today`.
///
/// Only edits go through this; stored dates are never re-checked against a
/// window that moves every day.
pub fn date_input(raw: &str, today: NaiveDate) -> bool {
    let Some(d) = date::parse_date(raw) else {
        return false;
    };
    let (start, end) = date::edit_window(today);
    d >= start && d <= end
}

/// Exact 12-hour format match, no sanitization.
pub fn time_format(raw: &str) -> bool {
    formats::is_time(raw)
}
