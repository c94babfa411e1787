use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::tracker::RecordEdit;
use crate::errors::{AppResult, ValidationError};
use crate::ui::messages::{save_error, time_updated};

/// Overwrite login/logout of one listed record (1-based, as `list` shows).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        index,
        login,
        logout,
    } = &cli.command
    {
        let mut tracker = open_tracker(cli, cfg)?;

        let position = index
            .checked_sub(1)
            .ok_or(ValidationError::NoSuchRecord(*index))?;

        let edit = RecordEdit {
            login_time: login.clone(),
            logout_time: logout.clone().unwrap_or_default(),
        };

        let change = tracker.update_record(position, &edit).map_err(|e| match e {
            ValidationError::NoSuchRecord(_) => ValidationError::NoSuchRecord(*index),
            other => other,
        })?;

        if !change.saved {
            save_error();
            return Ok(());
        }

        let r = &change.record;
        audit(
            &tracker,
            "edit",
            &r.date,
            &format!(
                "{} → {} ({})",
                r.login_time,
                r.logout_time.as_deref().unwrap_or("--"),
                r.duration.as_deref().unwrap_or("--")
            ),
        );
        time_updated();
    }

    Ok(())
}
