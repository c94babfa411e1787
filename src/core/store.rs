//! Persistence store for the time-log collection.
//!
//! Reads are fail-safe: corrupted content is wiped rather than trusted,
//! invalid entries are dropped and the cleaned collection written back. A
//! storage that cannot be read at all is reported, and nothing is deleted.
//! Writes never persist a record that fails validation and never return an
//! error; failure is a plain `false`.

use crate::core::{integrity, validator};
use crate::models::TimeLogRecord;
use crate::storage::{CHECKSUM_KEY, KeyValueStorage, RECORDS_KEY, StorageError};
use serde_json::Value;
use tracing::{debug, error, warn};

pub struct TimeLogStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> TimeLogStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the persisted collection. A read failure yields an empty
    /// collection; use [`TimeLogStore::try_load`] to tell it apart.
    pub fn load(&mut self) -> Vec<TimeLogRecord> {
        self.try_load().unwrap_or_default()
    }

    /// Load the persisted collection, failing only when storage could not be
    /// read. The stored data is left untouched in that case.
    pub fn try_load(&mut self) -> Result<Vec<TimeLogRecord>, StorageError> {
        let raw = match self.storage.get(RECORDS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(StorageError::Corrupt { reason, .. }) => {
                error!(%reason, "stored time logs are unreadable, resetting");
                self.discard_records();
                return Ok(Vec::new());
            }
            Err(e) => {
                error!(error = %e, "failed to read time logs");
                return Err(e);
            }
        };

        let parsed: Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                error!(error = %e, "stored time logs are not valid JSON, resetting");
                self.discard_records();
                return Ok(Vec::new());
            }
        };

        let Value::Array(items) = parsed else {
            warn!("stored time logs are not an array, resetting");
            self.discard_records();
            return Ok(Vec::new());
        };

        let mut valid = Vec::with_capacity(items.len());
        let mut rewrite = false;
        for item in &items {
            match validator::from_value(item) {
                Some(record) => {
                    // unknown keys are not carried over
                    rewrite |= serde_json::to_value(&record).ok().as_ref() != Some(item);
                    valid.push(record);
                }
                None => {
                    warn!(entry = %item, "invalid time log entry detected and removed");
                    rewrite = true;
                }
            }
        }

        if rewrite {
            self.write(&valid);
        }

        Ok(valid)
    }

    /// Persist the collection, re-filtering it through the validator first.
    pub fn save(&mut self, records: &[TimeLogRecord]) -> bool {
        let valid = validator::retain_valid(records);
        if valid.len() != records.len() {
            warn!(
                dropped = records.len() - valid.len(),
                "some invalid logs were filtered out before saving"
            );
        }
        self.write(&valid)
    }

    /// Delete both the records and the checksum. The only deletion path.
    pub fn reset(&mut self) {
        for key in [RECORDS_KEY, CHECKSUM_KEY] {
            if let Err(e) = self.storage.remove(key) {
                error!(key, error = %e, "failed to remove key during reset");
            }
        }
    }

    /// See [`integrity::validate`].
    pub fn validate_integrity(&mut self, records: &[TimeLogRecord]) -> bool {
        integrity::validate(&mut self.storage, records)
    }

    /// See [`integrity::update_checksum`].
    pub fn update_checksum(&mut self, records: &[TimeLogRecord]) {
        integrity::update_checksum(&mut self.storage, records)
    }

    fn write(&mut self, records: &[TimeLogRecord]) -> bool {
        let json = integrity::serialize(records);
        match self.storage.set(RECORDS_KEY, &json) {
            Ok(()) => {
                debug!(count = records.len(), bytes = json.len(), "time logs written");
                true
            }
            Err(e) => {
                error!(error = %e, "error saving time logs");
                false
            }
        }
    }

    fn discard_records(&mut self) {
        if let Err(e) = self.storage.remove(RECORDS_KEY) {
            error!(error = %e, "failed to remove corrupted time logs");
        }
    }
}
