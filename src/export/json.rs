use crate::errors::AppResult;
use crate::models::TimeLogRecord;
use std::path::Path;

/// Pretty JSON, same field names as storage.
pub fn write_json(path: &Path, records: &[TimeLogRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}
