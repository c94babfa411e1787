//! Canonical format predicates for time-log fields.
//!
//! The validator, the sanitizer and the time codec all go through these, so
//! "what the input filter lets through" and "what the store accepts" cannot
//! drift apart.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// `YYYY-MM-DD`, ASCII digits only.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// `H:MM AM` / `HH:MM PM`, hours 1..=12.
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0?[1-9]|1[0-2]):([0-5][0-9]) ([AP])M$").expect("valid time regex")
});

/// `{hours}h {minutes}m`
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)h ([0-9]+)m$").expect("valid duration regex"));

/// Everything a time field may contain while being typed.
static TIME_INPUT_REJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9:APM\s]").expect("valid time input regex"));

/// Maximum length of a sanitized time input ("12:00 PM").
pub const TIME_INPUT_MAX_CHARS: usize = 8;

/// `YYYY-MM-DD` that also names a real calendar day (`2024-13-01` fails).
pub fn is_date(s: &str) -> bool {
    DATE_RE.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

pub fn is_time(s: &str) -> bool {
    TIME_RE.is_match(s)
}

pub fn is_duration(s: &str) -> bool {
    DURATION_RE.is_match(s)
}

/// Split a 12-hour time into `(hour, minute, is_pm)`.
pub fn time_parts(s: &str) -> Option<(u32, u32, bool)> {
    let caps = TIME_RE.captures(s)?;
    let hour = caps[1].parse().ok()?;
    let minute = caps[2].parse().ok()?;
    Some((hour, minute, &caps[3] == "P"))
}

/// Split a duration into `(hours, minutes)`.
pub fn duration_parts(s: &str) -> Option<(u64, u64)> {
    let caps = DURATION_RE.captures(s)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}

/// Strip characters a time field can never contain.
pub fn strip_time_input(s: &str) -> String {
    TIME_INPUT_REJECT_RE.replace_all(s, "").into_owned()
}
