pub mod record;
pub mod status;

pub use record::TimeLogRecord;
pub use status::DayStatus;
