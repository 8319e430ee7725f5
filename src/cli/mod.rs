pub mod commands;
pub mod context;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Browse, filter and export event-listener audit logs.
#[derive(Parser, Debug)]
#[command(name = "auditlog", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the config file (default: ./auditlog.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Session user the request is made as
    #[arg(long = "as", global = true, env = "AUDITLOG_USER")]
    pub as_user: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the latest lines of matching log files as JSON
    View {
        /// Log category (subdirectory of the log output root)
        category: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print the JSON array on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Export matching log files as a zip archive
    Download {
        /// Log category (subdirectory of the log output root)
        category: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Directory to write the archive into
        #[arg(long, short, default_value = ".")]
        output: PathBuf,
    },

    /// Show the timestamp layout of log file names
    Pattern,
}

/// Filters shared by `view` and `download`. Empty values are ignored.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only files written for this user
    #[arg(long)]
    pub user: Option<String>,

    /// Earliest timestamp, inclusive (YYYY-MM-DD or YYYY-MM-DD.HH)
    #[arg(long)]
    pub begin_time: Option<String>,

    /// Latest timestamp, inclusive (YYYY-MM-DD or YYYY-MM-DD.HH)
    #[arg(long)]
    pub end_time: Option<String>,

    /// Only files of this level, e.g. INFO
    #[arg(long)]
    pub level: Option<String>,
}
