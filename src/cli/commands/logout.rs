use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::DayStatus;
use crate::ui::messages::{info, logout_success, save_error, warning};

/// Record today's logout.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cli, cfg)?;

    let status = tracker.day_status();
    if !status.can_logout() {
        if status == DayStatus::Completed {
            warning("Already logged out today. Use `edit` to change the times.");
        } else {
            warning("No open session for today: log in first.");
        }
        return Ok(());
    }

    let Some(change) = tracker.logout() else {
        return Ok(());
    };

    if !change.saved {
        save_error();
        return Ok(());
    }

    let logout = change.record.logout_time.as_deref().unwrap_or_default();
    audit(
        &tracker,
        "logout",
        &change.record.date,
        &format!(
            "Logout at {} ({})",
            logout,
            change.record.duration.as_deref().unwrap_or("no duration")
        ),
    );
    logout_success(logout);

    if let Some(d) = &change.record.duration {
        info(format!("Worked today: {d}"));
    }

    Ok(())
}
