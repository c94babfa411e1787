use crate::models::record::TimeLogRecord;

/// Where today stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    NotStarted,
    LoggedIn,
    Completed,
}

impl DayStatus {
    pub fn of(today: Option<&TimeLogRecord>) -> Self {
        match today {
            None => DayStatus::NotStarted,
            Some(r) if r.is_open() => DayStatus::LoggedIn,
            Some(_) => DayStatus::Completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::NotStarted => "Not Started",
            DayStatus::LoggedIn => "Logged In",
            DayStatus::Completed => "Completed",
        }
    }

    pub fn can_login(&self) -> bool {
        matches!(self, DayStatus::NotStarted)
    }

    pub fn can_logout(&self) -> bool {
        matches!(self, DayStatus::LoggedIn)
    }
}
