use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::kv::SqliteStorage;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::storage::{KeyValueStorage, RECORDS_KEY};

/// Create the config file (unless `--test`) and the database with its
/// `kv` and `log` tables. Existing time logs are left alone.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing logdesk…");
    println!("🗄️  Database   : {db_path}");

    let storage = SqliteStorage::open(&db_path)?;
    if storage.get(RECORDS_KEY)?.is_some() {
        println!("📂 Existing time logs kept.");
    }

    ttlog_quiet(
        storage.conn(),
        "init",
        "",
        &format!("Database initialized at {db_path}"),
    );

    println!("✅ Database initialized at {db_path}");
    Ok(())
}
