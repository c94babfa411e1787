//! One handler per subcommand, plus the shared tracker bootstrap.

pub mod config;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod logout;
pub mod reset;
pub mod status;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::db::kv::SqliteStorage;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::clock::{Clock, FixedClock, SystemClock, parse_clock_override};

pub type CliTracker = Tracker<SqliteStorage, Box<dyn Clock>>;

/// Open the configured database, build the tracker and load the logs.
/// An integrity mismatch is reported here and does not stop the command.
pub fn open_tracker(cli: &Cli, cfg: &Config) -> AppResult<CliTracker> {
    let clock: Box<dyn Clock> = match &cli.now {
        Some(s) => Box::new(FixedClock(
            parse_clock_override(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        )),
        None => Box::new(SystemClock),
    };

    let storage = SqliteStorage::open(&cfg.database)?;
    let mut tracker = Tracker::new(storage, clock).with_shift_minutes(cfg.shift_minutes());

    let loaded = tracker.load_records();
    if loaded.read_failed {
        return Err(AppError::Unreadable(cfg.database.clone()));
    }
    if !loaded.integrity_ok {
        messages::integrity_warning();
        audit(&tracker, "integrity", "", "checksum mismatch on load");
    }

    Ok(tracker)
}

/// Append to the internal log table of the tracker's database.
pub(crate) fn audit(tracker: &CliTracker, operation: &str, target: &str, message: &str) {
    ttlog_quiet(tracker.store().storage().conn(), operation, target, message);
}
