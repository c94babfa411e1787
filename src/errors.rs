//! Error types.
//!
//! `ValidationError` is what the tracker hands back for a refused edit.
//! `AppError` is what the CLI layer and the SQLite plumbing return; the
//! store itself never surfaces a storage or parse failure.

use std::io;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Could not read the stored time logs ({0}); nothing was changed")]
    Unreadable(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A `--now` override that is not `YYYY-MM-DD HH:MM[:SS]`.
    #[error("Invalid date/time: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Why an edit to a time log was refused. Nothing is mutated when one of
/// these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid time format '{0}': use a format like '9:00 AM' or '5:30 PM'")]
    InvalidTimeFormat(String),

    #[error("Invalid date '{0}': log date is invalid or outside the acceptable range")]
    InvalidDate(String),

    #[error("Logout {logout} is earlier than login {login}")]
    LogoutBeforeLogin { login: String, logout: String },

    #[error("No time log at position {0}")]
    NoSuchRecord(usize),
}
