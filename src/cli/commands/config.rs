use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = &cli.command
        && *print_config
    {
        println!("📄 Configuration file: {}\n", Config::config_file().display());
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("{yaml}");
        println!("Shift length in minutes: {}", cfg.shift_minutes());
    }

    Ok(())
}
