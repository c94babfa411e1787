//! logdesk library root.
//!
//! The core (`core`, `models`, `storage`, `utils`) is a validated persistence
//! and time-arithmetic layer for daily login/logout logs. `cli` and `db` wire
//! it to a terminal and a SQLite file.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(cli, cfg),
        Commands::Login { .. } => cli::commands::login::handle(cli, cfg),
        Commands::Logout => cli::commands::logout::handle(cli, cfg),
        Commands::Status { .. } => cli::commands::status::handle(cli, cfg),
        Commands::List => cli::commands::list::handle(cli, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(cli, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once and passed down.
    let mut cfg = Config::load()?;

    // --db wins over the configured path; both resolve like `init` does.
    let database = cli.db.clone().unwrap_or_else(|| cfg.database.clone());
    cfg.database = utils::path::resolve_in(&Config::config_dir(), &database)
        .to_string_lossy()
        .to_string();

    utils::logging::enable_logging(&cfg.log_level);

    dispatch(&cli, &cfg)
}
