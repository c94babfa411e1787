use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, login_success, save_error, warning};

/// Record today's login.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { force } = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;

        if !tracker.day_status().can_login() && !*force {
            if let Some(r) = tracker.today_record() {
                warning(format!(
                    "Already logged in today at {}. Use --force to start the day again.",
                    r.login_time
                ));
            }
            return Ok(());
        }

        let change = tracker.login();
        if !change.saved {
            save_error();
            return Ok(());
        }

        audit(
            &tracker,
            "login",
            &change.record.date,
            &format!("Login at {}", change.record.login_time),
        );
        login_success(&change.record.login_time);

        if let Some(expected) = tracker.expected_logout() {
            info(format!("Expected logout: {} ({} shift)", expected, cfg.shift_duration));
        }
    }

    Ok(())
}
