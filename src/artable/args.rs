use clap::{Parser, Subcommand};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "artable")]
#[command(about = "Browse and select rows from a paginated artwork API", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the API endpoint for this invocation
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Verbose output (logs each page fetch)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of the dataset
    #[command(alias = "ls")]
    List {
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Select COUNT rows starting at a page, fetching further pages as needed
    #[command(alias = "s")]
    Select {
        /// Number of rows to select (omitted, 0, or negative: one page's worth)
        #[arg(allow_negative_numbers = true)]
        count: Option<i64>,

        /// Page to anchor the selection at (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show or change configuration (keys: endpoint, timeout_secs)
    Config {
        /// Config key to set
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}
