//! User-facing notifications.
//!
//! Generic `info` / `success` / `warning` / `error` printers, plus the fixed
//! messages the tracker's outcomes map to.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}====================== {}{}\n", FG_BLUE, BOLD, msg, RESET);
}

pub fn login_success(time: &str) {
    success(format!(
        "Login time recorded: {time}. You're now tracking your work session."
    ));
}

pub fn logout_success(time: &str) {
    success(format!(
        "Logout time recorded: {time}. Work session completed."
    ));
}

pub fn time_updated() {
    success("Log entry has been updated successfully.");
}

pub fn data_reset() {
    success("All time logs have been cleared. Application reset to initial state.");
}

pub fn integrity_warning() {
    error("Data Integrity Warning: some data may have been corrupted. Please verify your time logs.");
}

pub fn save_error() {
    error("Save Error: failed to save time logs. Please try again.");
}
