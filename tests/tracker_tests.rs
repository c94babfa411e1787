mod common;

use common::dt;
use logdesk::core::integrity::checksum;
use logdesk::core::tracker::{Confirmation, RecordEdit, Tracker};
use logdesk::errors::ValidationError;
use logdesk::models::{DayStatus, TimeLogRecord};
use logdesk::storage::{CHECKSUM_KEY, KeyValueStorage, MemoryStorage, RECORDS_KEY, StorageError};
use logdesk::utils::clock::FixedClock;
use std::cell::Cell;

fn tracker_at(now: &str) -> Tracker<MemoryStorage, FixedClock> {
    let mut tracker = Tracker::new(MemoryStorage::new(), FixedClock(dt(now)));
    assert!(tracker.load_records().integrity_ok);
    tracker
}

/// Memory storage whose next `fail_reads` reads fail with a backend error.
struct FailingReads {
    inner: MemoryStorage,
    fail_reads: Cell<u32>,
}

impl KeyValueStorage for FailingReads {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let left = self.fail_reads.get();
        if left > 0 {
            self.fail_reads.set(left - 1);
            return Err(StorageError::Backend(rusqlite::Error::InvalidQuery));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

fn seeded(now: &str, records: &[TimeLogRecord]) -> Tracker<MemoryStorage, FixedClock> {
    let mut storage = MemoryStorage::new();
    storage
        .set(RECORDS_KEY, &serde_json::to_string(records).unwrap())
        .unwrap();
    storage.set(CHECKSUM_KEY, &checksum(records)).unwrap();

    let mut tracker = Tracker::new(storage, FixedClock(dt(now)));
    let loaded = tracker.load_records();
    assert!(loaded.integrity_ok);
    tracker
}

fn edit(login: &str, logout: &str) -> RecordEdit {
    RecordEdit {
        login_time: login.into(),
        logout_time: logout.into(),
    }
}

#[test]
fn test_login_creates_todays_record_and_persists() {
    let mut tracker = tracker_at("2025-03-10 09:00:30");
    assert_eq!(tracker.day_status(), DayStatus::NotStarted);

    let change = tracker.login();
    assert!(change.saved);
    assert_eq!(change.record, TimeLogRecord::new("2025-03-10", "9:00 AM"));
    assert_eq!(tracker.day_status(), DayStatus::LoggedIn);
    assert_eq!(tracker.expected_logout().as_deref(), Some("5:30 PM"));

    let storage = tracker.store().storage();
    assert_eq!(
        storage.raw(RECORDS_KEY).unwrap(),
        serde_json::to_string(&[change.record.clone()]).unwrap()
    );
    assert_eq!(
        storage.raw(CHECKSUM_KEY).unwrap(),
        checksum(&[change.record])
    );
}

#[test]
fn test_login_replaces_todays_record_and_goes_first() {
    let older = TimeLogRecord::new("2025-03-07", "8:00 AM").with_logout("4:00 PM", Some("8h 0m".into()));
    let mut tracker = seeded("2025-03-10 09:00:00", &[older.clone()]);

    tracker.record_login(dt("2025-03-10 09:00:00"));
    tracker.record_login(dt("2025-03-10 09:20:00"));

    assert_eq!(
        tracker.records(),
        &[TimeLogRecord::new("2025-03-10", "9:20 AM"), older]
    );
}

#[test]
fn test_login_then_logout_same_day() {
    let mut tracker = tracker_at("2025-03-10 09:00:30");
    tracker.login();

    let change = tracker
        .record_logout(dt("2025-03-10 17:30:10"))
        .expect("open record to close");

    assert!(change.saved);
    assert_eq!(change.record.login_time, "9:00 AM");
    assert_eq!(change.record.logout_time.as_deref(), Some("5:30 PM"));
    assert_eq!(change.record.duration.as_deref(), Some("8h 30m"));
    assert_eq!(tracker.day_status(), DayStatus::Completed);

    // reload from storage: same data, checksum agrees
    let storage = tracker.store().storage().clone();
    let mut reloaded = Tracker::new(storage, FixedClock(dt("2025-03-10 18:00:00")));
    let loaded = reloaded.load_records();
    assert!(loaded.integrity_ok);
    assert_eq!(loaded.records, vec![change.record]);
}

#[test]
fn test_noon_login_regression() {
    let mut tracker = tracker_at("2025-03-10 12:00:00");
    assert_eq!(tracker.login().record.login_time, "12:00 PM");
    assert_eq!(tracker.expected_logout().as_deref(), Some("8:30 PM"));

    let change = tracker.record_logout(dt("2025-03-10 13:30:00")).unwrap();
    assert_eq!(change.record.duration.as_deref(), Some("1h 30m"));
}

#[test]
fn test_logout_without_open_record_is_noop() {
    let mut tracker = tracker_at("2025-03-10 17:00:00");
    assert_eq!(tracker.logout(), None);
    assert!(!tracker.store().storage().contains(RECORDS_KEY));

    // yesterday's open record does not count
    let mut tracker = seeded("2025-03-10 17:00:00", &[TimeLogRecord::new("2025-03-09", "9:00 AM")]);
    assert_eq!(tracker.logout(), None);

    // already closed
    let mut tracker = tracker_at("2025-03-10 09:00:00");
    tracker.login();
    assert!(tracker.record_logout(dt("2025-03-10 17:00:00")).is_some());
    assert_eq!(tracker.record_logout(dt("2025-03-10 18:00:00")), None);
}

#[test]
fn test_logout_before_login_stores_no_duration() {
    let mut tracker = seeded("2025-03-10 08:00:00", &[TimeLogRecord::new("2025-03-10", "10:00 AM")]);

    let change = tracker.logout().unwrap();
    assert_eq!(change.record.logout_time.as_deref(), Some("8:00 AM"));
    assert_eq!(change.record.duration, None);
    assert!(change.saved);
}

#[test]
fn test_load_reports_integrity_mismatch_but_returns_data() {
    let records = vec![TimeLogRecord::new("2025-03-10", "9:00 AM")];
    let mut storage = MemoryStorage::new();
    storage
        .set(RECORDS_KEY, &serde_json::to_string(&records).unwrap())
        .unwrap();
    storage.set(CHECKSUM_KEY, "12345").unwrap();

    let mut tracker = Tracker::new(storage, FixedClock(dt("2025-03-10 10:00:00")));
    let loaded = tracker.load_records();

    assert!(!loaded.integrity_ok);
    assert_eq!(loaded.records, records);
    assert_eq!(tracker.records(), records.as_slice());
}

#[test]
fn test_load_without_checksum_trusts_first_use() {
    let records = vec![TimeLogRecord::new("2025-03-10", "9:00 AM")];
    let mut storage = MemoryStorage::new();
    storage
        .set(RECORDS_KEY, &serde_json::to_string(&records).unwrap())
        .unwrap();

    let mut tracker = Tracker::new(storage, FixedClock(dt("2025-03-10 10:00:00")));
    assert!(tracker.load_records().integrity_ok);
    assert_eq!(
        tracker.store().storage().raw(CHECKSUM_KEY),
        Some(checksum(&records).as_str())
    );
}

#[test]
fn test_update_record_sanitizes_and_recomputes_duration() {
    let mut tracker = seeded("2025-03-10 18:00:00", &[TimeLogRecord::new("2025-03-10", "9:00 AM")]);

    let change = tracker
        .update_record(0, &edit("8:45 AMxyz", "5:00 PM!!"))
        .expect("valid edit");

    assert!(change.saved);
    assert_eq!(
        change.record,
        TimeLogRecord::new("2025-03-10", "8:45 AM").with_logout("5:00 PM", Some("8h 15m".into()))
    );
    assert_eq!(tracker.records()[0], change.record);
    assert_eq!(
        tracker.store().storage().raw(CHECKSUM_KEY),
        Some(checksum(tracker.records()).as_str())
    );
}

#[test]
fn test_update_record_with_empty_logout_clears_it() {
    let closed = TimeLogRecord::new("2025-03-10", "9:00 AM").with_logout("5:00 PM", Some("8h 0m".into()));
    let mut tracker = seeded("2025-03-10 18:00:00", &[closed]);

    let change = tracker.update_record(0, &edit("9:30 AM", "")).unwrap();
    assert_eq!(change.record, TimeLogRecord::new("2025-03-10", "9:30 AM"));
    assert_eq!(tracker.day_status(), DayStatus::LoggedIn);
}

#[test]
fn test_update_record_rejections_leave_state_untouched() {
    let before = vec![
        TimeLogRecord::new("2025-03-10", "9:00 AM"),
        TimeLogRecord::new("2020-01-06", "9:00 AM").with_logout("5:00 PM", Some("8h 0m".into())),
    ];
    let mut tracker = seeded("2025-03-10 18:00:00", &before);
    let raw_before = tracker.store().storage().raw(RECORDS_KEY).unwrap().to_string();

    assert_eq!(
        tracker.update_record(0, &edit("25:00", "")),
        Err(ValidationError::InvalidTimeFormat("25:00".into()))
    );
    assert_eq!(
        tracker.update_record(0, &edit("9:00 AM", "5 PM")),
        Err(ValidationError::InvalidTimeFormat("5 PM".into()))
    );
    assert_eq!(
        tracker.update_record(1, &edit("9:00 AM", "5:00 PM")),
        Err(ValidationError::InvalidDate("2020-01-06".into()))
    );
    assert_eq!(
        tracker.update_record(0, &edit("5:00 PM", "9:00 AM")),
        Err(ValidationError::LogoutBeforeLogin {
            login: "5:00 PM".into(),
            logout: "9:00 AM".into()
        })
    );
    assert_eq!(
        tracker.update_record(7, &edit("9:00 AM", "")),
        Err(ValidationError::NoSuchRecord(7))
    );

    assert_eq!(tracker.records(), before.as_slice());
    assert_eq!(tracker.store().storage().raw(RECORDS_KEY).unwrap(), raw_before);
}

#[test]
fn test_failed_save_keeps_memory_but_not_storage() {
    let mut tracker = Tracker::new(MemoryStorage::with_quota(8), FixedClock(dt("2025-03-10 09:00:00")));
    tracker.load_records();

    let change = tracker.login();
    assert!(!change.saved);
    assert_eq!(tracker.records().len(), 1);
    assert!(!tracker.store().storage().contains(RECORDS_KEY));
    assert!(!tracker.store().storage().contains(CHECKSUM_KEY));
}

#[test]
fn test_reset_requires_confirmation() {
    let mut tracker = tracker_at("2025-03-10 09:00:00");
    tracker.login();
    tracker.record_login(dt("2025-03-10 09:05:00"));

    assert!(!tracker.reset_all(Confirmation::No));
    assert_eq!(tracker.records().len(), 1);
    assert!(tracker.store().storage().contains(RECORDS_KEY));

    assert!(tracker.reset_all(Confirmation::Yes));
    assert!(tracker.records().is_empty());
    assert!(!tracker.store().storage().contains(RECORDS_KEY));
    assert!(!tracker.store().storage().contains(CHECKSUM_KEY));

    let loaded = tracker.load_records();
    assert!(loaded.records.is_empty());
    assert!(loaded.integrity_ok);
}

#[test]
fn test_unreadable_storage_is_reported_and_never_overwritten() {
    let history = vec![
        TimeLogRecord::new("2025-03-07", "9:00 AM").with_logout("5:00 PM", Some("8h 0m".into())),
        TimeLogRecord::new("2025-03-06", "9:00 AM").with_logout("5:30 PM", Some("8h 30m".into())),
    ];
    let mut inner = MemoryStorage::new();
    inner
        .set(RECORDS_KEY, &serde_json::to_string(&history).unwrap())
        .unwrap();
    inner.set(CHECKSUM_KEY, &checksum(&history)).unwrap();
    let raw_before = inner.raw(RECORDS_KEY).unwrap().to_string();

    let storage = FailingReads {
        inner,
        fail_reads: Cell::new(1),
    };
    let mut tracker = Tracker::new(storage, FixedClock(dt("2025-03-10 09:00:00")));

    let loaded = tracker.load_records();
    assert!(loaded.read_failed);
    assert!(!loaded.integrity_ok);
    assert!(loaded.records.is_empty());

    let change = tracker.login();
    assert!(!change.saved);
    assert_eq!(
        tracker.store().storage().inner.raw(RECORDS_KEY).unwrap(),
        raw_before
    );
    assert_eq!(
        tracker.store().storage().inner.raw(CHECKSUM_KEY),
        Some(checksum(&history).as_str())
    );

    // storage is back: history reappears and writes resume
    let loaded = tracker.load_records();
    assert!(!loaded.read_failed);
    assert!(loaded.integrity_ok);
    assert_eq!(loaded.records, history);

    assert!(tracker.login().saved);
    assert_eq!(tracker.records().len(), 3);
}

#[test]
fn test_tracker_writes_nothing_before_first_load() {
    let mut storage = MemoryStorage::new();
    let history = vec![TimeLogRecord::new("2025-03-07", "9:00 AM")];
    storage
        .set(RECORDS_KEY, &serde_json::to_string(&history).unwrap())
        .unwrap();

    let mut tracker = Tracker::new(storage, FixedClock(dt("2025-03-10 09:00:00")));
    assert!(!tracker.login().saved);
    assert_eq!(
        tracker.store().storage().raw(RECORDS_KEY).unwrap(),
        serde_json::to_string(&history).unwrap()
    );
}
