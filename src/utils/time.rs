//! Time codec: 12-hour display strings, 24-hour conversion, durations.
//!
//! Nothing in here fails loudly. Malformed input turns into `None` or into
//! the [`INVALID`] display token.

use crate::utils::{date, formats};
use chrono::{NaiveTime, TimeDelta};

/// Displayed in place of a duration that cannot be computed.
pub const INVALID: &str = "Invalid";

/// Default expected shift: 8h 30m.
pub const DEFAULT_SHIFT_MINUTES: i64 = 8 * 60 + 30;

/// Parse `"9:00 AM"` into a clock time.
///
/// `12:xx AM` is just after midnight and `12:xx PM` is just after noon.
pub fn parse_12_hour(t: &str) -> Option<NaiveTime> {
    let (hour, minute, pm) = formats::time_parts(t)?;
    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// `"5:30 PM"` → `"17:30:00"`.
pub fn to_24_hour(t: &str) -> Option<String> {
    parse_12_hour(t).map(|time| time.format("%H:%M:%S").to_string())
}

/// Render a clock reading the way login/logout times are stored: `"9:05 AM"`.
pub fn format_12_hour(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Whole minutes from `login` to `logout` on `date`. Negative when the
/// logout is earlier.
pub fn minutes_between(date: &str, login: &str, logout: &str) -> Option<i64> {
    let day = date::parse_date(date)?;
    let start = day.and_time(parse_12_hour(login)?);
    let end = day.and_time(parse_12_hour(logout)?);
    Some((end - start).num_minutes())
}

/// `"{h}h {m}m"` between login and logout, or [`INVALID`] when the logout
/// precedes the login or anything fails to parse.
pub fn duration(date: &str, login: &str, logout: &str) -> String {
    match minutes_between(date, login, logout) {
        Some(mins) if mins >= 0 => format_duration(mins),
        _ => INVALID.to_string(),
    }
}

pub fn format_duration(mins: i64) -> String {
    format!("{}h {}m", mins / 60, mins % 60)
}

/// Login plus the shift length, as a 12-hour string. Wraps past midnight.
pub fn expected_logout(login: &str, shift_minutes: i64) -> String {
    match (parse_12_hour(login), TimeDelta::try_minutes(shift_minutes)) {
        (Some(start), Some(shift)) => format_12_hour(start + shift),
        _ => INVALID.to_string(),
    }
}

/// Parse a `"8h 30m"` shift length into minutes.
pub fn parse_shift(text: &str) -> Option<i64> {
    let (hours, minutes) = formats::duration_parts(text.trim())?;
    let total = hours.checked_mul(60)?.checked_add(minutes)?;
    i64::try_from(total).ok()
}
