//! Record validator: structural schema check for one stored time log.

use crate::models::TimeLogRecord;
use crate::utils::formats;
use serde_json::Value;

/// `true` when `candidate` is an object carrying a well-formed `date` and
/// `loginTime`, and a well-formed `logoutTime` / `duration` if those keys are
/// present at all. A present-but-`null` optional field is rejected.
///
/// Extra keys are ignored.
pub fn is_valid(candidate: &Value) -> bool {
    let Some(obj) = candidate.as_object() else {
        return false;
    };

    let required = |key: &str, check: fn(&str) -> bool| {
        obj.get(key).and_then(Value::as_str).is_some_and(check)
    };
    let optional = |key: &str, check: fn(&str) -> bool| match obj.get(key) {
        None => true,
        Some(v) => v.as_str().is_some_and(check),
    };

    required("date", formats::is_date)
        && required("loginTime", formats::is_time)
        && optional("logoutTime", formats::is_time)
        && optional("duration", formats::is_duration)
}

/// Materialise a typed record from a value that passes [`is_valid`].
pub fn from_value(candidate: &Value) -> Option<TimeLogRecord> {
    if !is_valid(candidate) {
        return None;
    }

    let field = |key: &str| candidate.get(key).and_then(Value::as_str).map(str::to_string);

    Some(TimeLogRecord {
        date: field("date")?,
        login_time: field("loginTime")?,
        logout_time: field("logoutTime"),
        duration: field("duration"),
    })
}

/// Keep only the records that pass the schema check, in order.
pub fn retain_valid(records: &[TimeLogRecord]) -> Vec<TimeLogRecord> {
    records.iter().filter(|r| r.is_valid()).cloned().collect()
}
