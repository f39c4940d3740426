use clap::{Parser, Subcommand};

/// Command-line interface definition for clearmind
/// CLI daily mapper: time blocks, recurring templates, day reconciliation
#[derive(Parser)]
#[command(
    name = "clearmind",
    version = env!("CARGO_PKG_VERSION"),
    about = "A daily mapper CLI: time-block entries, recurring templates, and idempotent day reconciliation over SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the cloud mirror directory (enables sync)
    #[arg(global = true, long = "sync-dir")]
    pub sync_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a time-block entry
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Block start time (HH:MM)
        #[arg(long = "from", help = "Block start time (HH:MM)")]
        start: String,

        /// Block end time (HH:MM)
        #[arg(long = "to", help = "Block end time (HH:MM)")]
        end: String,

        /// Task description
        #[arg(long = "task", help = "Task description")]
        task: String,

        /// Optional free-form comment
        #[arg(long = "comment", help = "Optional comment")]
        comment: Option<String>,
    },

    /// List entries for a day (runs the reconciliation pass first)
    List {
        #[arg(long = "date", help = "Day to list (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "all", help = "List every live entry, grouped by date")]
        all: bool,
    },

    /// Set the completion status of an entry
    Done {
        /// Entry id
        id: i64,

        #[arg(
            long = "partial",
            conflicts_with = "reset",
            help = "Mark as partially completed"
        )]
        partial: bool,

        #[arg(long = "reset", help = "Reset to not completed")]
        reset: bool,
    },

    /// Delete an entry (soft delete by default)
    Del {
        /// Entry id
        id: i64,

        #[arg(long = "hard", help = "Remove the row permanently instead of flagging it")]
        hard: bool,
    },

    /// Manage recurring templates (permanent blocks)
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },

    /// Run the reconciliation pass explicitly
    Reconcile {
        #[arg(
            long = "date",
            help = "Reconcile as if today were this date (YYYY-MM-DD)"
        )]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Promote an existing entry to a recurring template
    Make {
        /// Id of the entry to promote
        entry_id: i64,

        #[arg(long = "cadence", help = "Recurrence: daily, workday or weekend")]
        cadence: String,
    },

    /// List templates
    List,

    /// Delete a template, cascading to all entries linked to it
    Del {
        /// Template id
        id: i64,
    },
}
