use crate::cli::commands::{CliTracker, open_tracker};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::DayStatus;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW, colorize_optional};
use crate::utils::time::{self, format_12_hour};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

fn status_color(status: DayStatus) -> &'static str {
    match status {
        DayStatus::NotStarted => GREY,
        DayStatus::LoggedIn => YELLOW,
        DayStatus::Completed => GREEN,
    }
}

fn print_status(tracker: &CliTracker, cfg: &Config) {
    let now = tracker.now();
    let status = tracker.day_status();
    let today = tracker.today_record();

    header(format!("Today's Status: {}", now.format("%A, %B %-d, %Y")));

    println!("Current time    : {CYAN}{}{RESET}", format_12_hour(now.time()));
    println!(
        "Login time      : {}",
        colorize_optional(today.map(|r| r.login_time.as_str()), "—")
    );
    println!(
        "Expected logout : {} ({} shift)",
        colorize_optional(tracker.expected_logout().as_deref(), "—"),
        cfg.shift_duration
    );
    println!(
        "Status          : {}{}{RESET}",
        status_color(status),
        status.label()
    );

    if let Some(r) = today {
        let worked = match &r.duration {
            Some(d) => d.clone(),
            None if r.is_open() => format!(
                "In Progress... ({} so far)",
                time::duration(&r.date, &r.login_time, &format_12_hour(now.time()))
            ),
            None => time::INVALID.to_string(),
        };
        println!("Today's duration: {worked}");
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { watch } = &cli.command {
        let tracker = open_tracker(cli, cfg)?;
        print_status(&tracker, cfg);

        // Display only: the tick never touches storage.
        if *watch {
            loop {
                thread::sleep(Duration::from_secs(1));
                print!("\r{CYAN}{}{RESET}   ", format_12_hour(tracker.now().time()));
                io::stdout().flush()?;
            }
        }
    }

    Ok(())
}
