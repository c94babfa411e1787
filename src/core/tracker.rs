//! The tracker: everything the presentation layer is allowed to do with the
//! time logs.
//!
//! One tracker per process. It owns the store (and through it the storage
//! provider) plus the in-memory collection; every mutation updates memory
//! first and then persists the whole collection. Nothing is persisted until
//! the stored collection has been read successfully, so a failed read can
//! never be followed by a write over history that was not seen.

use crate::core::sanitize;
use crate::core::store::TimeLogStore;
use crate::errors::ValidationError;
use crate::models::{DayStatus, TimeLogRecord};
use crate::storage::KeyValueStorage;
use crate::utils::clock::Clock;
use crate::utils::date::format_date;
use crate::utils::time::{self, DEFAULT_SHIFT_MINUTES, INVALID};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

/// Result of [`Tracker::load_records`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub records: Vec<TimeLogRecord>,
    /// `false` when the stored checksum disagrees with the data. The data is
    /// returned regardless.
    pub integrity_ok: bool,
    /// Storage could not be read. `records` is empty and writes are refused
    /// until a later load succeeds.
    pub read_failed: bool,
}

/// A mutation that was applied in memory. `saved` tells whether it also
/// reached storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub record: TimeLogRecord,
    pub saved: bool,
}

/// Raw edit values as typed by the user. An empty logout clears it.
#[derive(Debug, Clone, Default)]
pub struct RecordEdit {
    pub login_time: String,
    pub logout_time: String,
}

/// Answer to "are you sure?" before wiping everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

pub struct Tracker<S, C> {
    store: TimeLogStore<S>,
    clock: C,
    records: Vec<TimeLogRecord>,
    shift_minutes: i64,
    loaded: bool,
}

impl<S: KeyValueStorage, C: Clock> Tracker<S, C> {
    pub fn new(storage: S, clock: C) -> Self {
        Self {
            store: TimeLogStore::new(storage),
            clock,
            records: Vec::new(),
            shift_minutes: DEFAULT_SHIFT_MINUTES,
            loaded: false,
        }
    }

    pub fn with_shift_minutes(mut self, minutes: i64) -> Self {
        self.shift_minutes = minutes;
        self
    }

    pub fn store(&self) -> &TimeLogStore<S> {
        &self.store
    }

    pub fn records(&self) -> &[TimeLogRecord] {
        &self.records
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.now().date()
    }

    /// Read the collection from storage, replacing whatever is in memory.
    ///
    /// The integrity check only runs on a non-empty collection; an empty
    /// store has nothing to vouch for. A read failure is never trusted.
    pub fn load_records(&mut self) -> Loaded {
        let (records, read_failed) = match self.store.try_load() {
            Ok(records) => (records, false),
            Err(_) => (Vec::new(), true),
        };

        let integrity_ok = !read_failed
            && (records.is_empty() || self.store.validate_integrity(&records));
        if read_failed {
            warn!("time logs could not be read, writes are disabled");
        } else if !integrity_ok {
            warn!(count = records.len(), "loaded time logs do not match the stored checksum");
        }

        self.loaded = !read_failed;
        self.records = records.clone();
        Loaded {
            records,
            integrity_ok,
            read_failed,
        }
    }

    pub fn today_record(&self) -> Option<&TimeLogRecord> {
        let today = format_date(self.today());
        self.records.iter().find(|r| r.date == today)
    }

    pub fn day_status(&self) -> DayStatus {
        DayStatus::of(self.today_record())
    }

    /// When today's shift is due to end, if today has a login.
    pub fn expected_logout(&self) -> Option<String> {
        self.today_record()
            .map(|r| time::expected_logout(&r.login_time, self.shift_minutes))
    }

    /// Start (or restart) the day at `now`. Any existing record for that date
    /// is replaced and the new one goes to the front.
    pub fn record_login(&mut self, now: NaiveDateTime) -> Change {
        let record = TimeLogRecord::new(format_date(now.date()), time::format_12_hour(now.time()));

        self.records.retain(|r| r.date != record.date);
        self.records.insert(0, record.clone());
        debug!(date = %record.date, login = %record.login_time, "login recorded");

        let saved = self.persist();
        Change { record, saved }
    }

    /// Close the open record for `now`'s date. `None` when there is nothing
    /// to close.
    pub fn record_logout(&mut self, now: NaiveDateTime) -> Option<Change> {
        let date = format_date(now.date());
        let logout = time::format_12_hour(now.time());

        let record = self
            .records
            .iter_mut()
            .find(|r| r.date == date && r.is_open())?;

        let duration = time::duration(&record.date, &record.login_time, &logout);
        record.logout_time = Some(logout);
        record.duration = if duration == INVALID {
            warn!(date = %record.date, "logout precedes login, duration not stored");
            None
        } else {
            Some(duration)
        };

        let record = record.clone();
        debug!(date = %record.date, "logout recorded");

        let saved = self.persist();
        Some(Change { record, saved })
    }

    /// Login now, using the injected clock.
    pub fn login(&mut self) -> Change {
        let now = self.clock.now();
        self.record_login(now)
    }

    /// Logout now, using the injected clock.
    pub fn logout(&mut self) -> Option<Change> {
        let now = self.clock.now();
        self.record_logout(now)
    }

    /// Overwrite login/logout of the record at `index`.
    ///
    /// Inputs are sanitized, format-checked, and the record's date must lie
    /// in the edit window. The duration is recomputed. On any error the
    /// collection is left untouched.
    pub fn update_record(
        &mut self,
        index: usize,
        edit: &RecordEdit,
    ) -> Result<Change, ValidationError> {
        let current = self
            .records
            .get(index)
            .ok_or(ValidationError::NoSuchRecord(index))?;

        let login = sanitize::time_input(&edit.login_time);
        let logout = sanitize::time_input(&edit.logout_time);
        let logout = (!logout.is_empty()).then_some(logout);

        if !sanitize::time_format(&login) {
            return Err(ValidationError::InvalidTimeFormat(login));
        }
        if let Some(out) = &logout
            && !sanitize::time_format(out)
        {
            return Err(ValidationError::InvalidTimeFormat(out.clone()));
        }

        if !sanitize::date_input(&current.date, self.today()) {
            return Err(ValidationError::InvalidDate(current.date.clone()));
        }

        let duration = match &logout {
            Some(out) => {
                let d = time::duration(&current.date, &login, out);
                if d == INVALID {
                    return Err(ValidationError::LogoutBeforeLogin {
                        login,
                        logout: out.clone(),
                    });
                }
                Some(d)
            }
            None => None,
        };

        let record = TimeLogRecord {
            date: current.date.clone(),
            login_time: login,
            logout_time: logout,
            duration,
        };
        self.records[index] = record.clone();
        debug!(index, date = %record.date, "time log updated");

        let saved = self.persist();
        Ok(Change { record, saved })
    }

    /// Wipe every record and the checksum, but only on an explicit yes.
    pub fn reset_all(&mut self, confirmation: Confirmation) -> bool {
        if confirmation != Confirmation::Yes {
            return false;
        }

        self.store.reset();
        self.records.clear();
        self.loaded = true;
        debug!("all time logs reset");
        true
    }

    /// Save the collection; refresh the checksum only if the save landed.
    fn persist(&mut self) -> bool {
        if !self.loaded {
            warn!("stored time logs were not read, refusing to overwrite them");
            return false;
        }

        if self.store.save(&self.records) {
            self.store.update_checksum(&self.records);
            true
        } else {
            false
        }
    }
}
