use crate::utils::formats;
use serde::{Deserialize, Serialize};

/// One calendar day's login/logout entry, exactly as it is persisted.
///
/// Field order matters: it fixes the serialized form the integrity checksum
/// is computed over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLogRecord {
    pub date: String, // "YYYY-MM-DD"

    #[serde(rename = "loginTime")]
    pub login_time: String, // "9:00 AM"

    #[serde(
        rename = "logoutTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub logout_time: Option<String>,

    /// Derived from login/logout; never authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl TimeLogRecord {
    /// A login-only record.
    pub fn new(date: impl Into<String>, login_time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            login_time: login_time.into(),
            logout_time: None,
            duration: None,
        }
    }

    pub fn with_logout(mut self, logout_time: impl Into<String>, duration: Option<String>) -> Self {
        self.logout_time = Some(logout_time.into());
        self.duration = duration;
        self
    }

    /// Structural check of every field. Cross-field consistency (does the
    /// duration match login/logout?) is deliberately not checked.
    pub fn is_valid(&self) -> bool {
        formats::is_date(&self.date)
            && formats::is_time(&self.login_time)
            && self.logout_time.as_deref().is_none_or(formats::is_time)
            && self.duration.as_deref().is_none_or(formats::is_duration)
    }

    pub fn is_open(&self) -> bool {
        self.logout_time.is_none()
    }
}
