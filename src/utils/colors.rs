//! ANSI color helper utilities for terminal output.
use crate::utils::time::INVALID;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey for a missing field, otherwise the value as-is.
pub fn colorize_optional(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}{placeholder}{RESET}"),
    }
}

/// Durations: red for the invalid token, green otherwise, grey when absent.
pub fn colorize_duration(value: Option<&str>) -> String {
    match value {
        Some(INVALID) => format!("{RED}{INVALID}{RESET}"),
        Some(v) if !v.is_empty() => format!("{GREEN}{v}{RESET}"),
        _ => format!("{GREY}—{RESET}"),
    }
}
