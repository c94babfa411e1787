use crate::cli::commands::open_tracker;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::TimeLogRecord;
use crate::utils::colors::{colorize_duration, colorize_optional};
use crate::utils::date::{parse_date, short_label};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cli, cfg)?;
    let records = tracker.records();

    if records.is_empty() {
        println!("No time logs yet. Start by logging in!");
        return Ok(());
    }

    print_records(records, &cfg.separator_char);
    Ok(())
}

fn print_records(records: &[TimeLogRecord], separator: &str) {
    let sep = separator.chars().next().unwrap_or('-').to_string();

    println!(
        "{:>3}  {:<10}  {:<12}  {:<8}  {:<11}  {}",
        "#", "DATE", "DAY", "LOGIN", "LOGOUT", "DURATION"
    );
    println!("{}", sep.repeat(62));

    for (i, r) in records.iter().enumerate() {
        let day = parse_date(&r.date).map(short_label).unwrap_or_default();
        let logout = colorize_optional(r.logout_time.as_deref(), "In Progress");
        // colour codes are invisible: pad on the raw text
        let logout_pad = 11usize.saturating_sub(r.logout_time.as_deref().unwrap_or("In Progress").len());

        println!(
            "{:>3}  {:<10}  {:<12}  {:<8}  {}{}  {}",
            i + 1,
            r.date,
            day,
            r.login_time,
            logout,
            " ".repeat(logout_pad),
            colorize_duration(r.duration.as_deref()),
        );
    }
}
