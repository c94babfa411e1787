use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::tracker::Confirmation;
use crate::errors::AppResult;
use crate::ui::messages::{data_reset, info, warning};
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> Confirmation {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok()
        && matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    {
        Confirmation::Yes
    } else {
        Confirmation::No
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;
        let count = tracker.records().len();

        let confirmation = if *yes {
            Confirmation::Yes
        } else {
            ask_confirmation(&format!(
                "This will permanently delete all {count} time logs. This action cannot be undone."
            ))
        };

        if !tracker.reset_all(confirmation) {
            info("Operation cancelled.");
            return Ok(());
        }

        audit(&tracker, "reset", "", &format!("{count} time logs deleted"));
        data_reset();
    }

    Ok(())
}
