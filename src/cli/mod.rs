pub mod commands;
pub mod context;
pub mod filters;
pub mod logging;
pub mod output;
pub mod render;

use clap::{Args, Parser, Subcommand};

/// Browse an API gateway's admin audit log from the terminal.
#[derive(Parser, Debug)]
#[command(name = "adminlog", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to alternative config file
    #[arg(long, global = true, env = "ADMINLOG_CONFIG")]
    pub config: Option<String>,

    /// Gateway base URL (overrides [server].base_url)
    #[arg(long, global = true, env = "ADMINLOG_SERVER")]
    pub server: Option<String>,

    /// Access token sent as a bearer token (overrides [server].access_token)
    #[arg(long, global = true, env = "ADMINLOG_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Do not read or write the saved page size
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors and results
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of the admin audit log
    Logs {
        #[command(flatten)]
        filters: FilterArgs,
        /// Page to show (starting at 1)
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Entries per page for this run (not saved)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Full-text search, keeping administrative entries only
    Search {
        /// Text to search for
        keyword: String,
        /// Page of the results to show (starting at 1)
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Entries per page for this run (not saved)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Page through the log interactively
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show or set the saved page size
    PageSize {
        /// New page size
        size: Option<usize>,
    },
}

/// Structured filter flags shared by `logs` and `browse`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only entries by this operator (substring match on the server)
    #[arg(long)]
    pub actor: Option<String>,
    /// Action type: any, user, channel, config, redemption, log
    #[arg(long = "type", value_name = "TYPE")]
    pub action: Option<String>,
    /// Start of the time window (YYYY-MM-DD or "YYYY-MM-DD HH:MM")
    #[arg(long)]
    pub since: Option<String>,
    /// End of the time window (YYYY-MM-DD or "YYYY-MM-DD HH:MM")
    #[arg(long)]
    pub until: Option<String>,
}
