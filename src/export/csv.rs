use crate::errors::AppResult;
use crate::models::TimeLogRecord;
use csv::Writer;
use std::path::Path;

/// One row per record; missing logout/duration become empty cells.
pub fn write_csv(path: &Path, records: &[TimeLogRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "login", "logout", "duration"])?;

    for r in records {
        wtr.write_record([
            r.date.as_str(),
            r.login_time.as_str(),
            r.logout_time.as_deref().unwrap_or(""),
            r.duration.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
