use crate::utils::formats;
use chrono::{Months, NaiveDate};

/// Strict `YYYY-MM-DD` parse. chrono alone would also take `2024-1-5`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !formats::is_date(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// The window a freshly edited log date must fall in: one year either side
/// of `today`, bounds included. Feb 29 clamps to Feb 28.
pub fn edit_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today
        .checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN);
    let end = today
        .checked_add_months(Months::new(12))
        .unwrap_or(NaiveDate::MAX);
    (start, end)
}

/// `"Mon, Jan 15"` style label for listings.
pub fn short_label(d: NaiveDate) -> String {
    d.format("%a, %b %-d").to_string()
}
