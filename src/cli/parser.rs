use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for logdesk
#[derive(Parser)]
#[command(
    name = "logdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track your daily login/logout times and worked hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin the clock to "YYYY-MM-DD HH:MM[:SS]" instead of the local time
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record today's login time
    Login {
        /// Replace today's record even if you already logged in
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Record today's logout time
    Logout,

    /// Show today's status, login and expected logout
    Status {
        /// Keep redrawing the current time every second (Ctrl-C to quit)
        #[arg(long)]
        watch: bool,
    },

    /// List all time logs
    List,

    /// Edit the login/logout of a listed time log
    Edit {
        /// Position of the log as shown by `list` (1 = first)
        index: usize,

        /// Login time, e.g. "9:00 AM"
        #[arg(long = "in", help = "Login time (e.g. '9:00 AM')")]
        login: String,

        /// Logout time, e.g. "5:30 PM"; omit to clear it
        #[arg(long = "out", help = "Logout time (e.g. '5:30 PM'); omit to clear")]
        logout: Option<String>,
    },

    /// Delete every time log
    Reset {
        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export time logs
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
