use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = &cli.command
    {
        let tracker = open_tracker(cli, cfg)?;
        ExportLogic::export(tracker.records(), *format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
