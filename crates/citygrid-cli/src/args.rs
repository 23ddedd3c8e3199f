use clap::{Parser, Subcommand};

/// CLI arguments for citygrid-cli
#[derive(Debug, Parser)]
#[command(
    name = "citygrid",
    version,
    about = "Search, sort and page through the citygrid world cities table"
)]
pub struct CliArgs {
    /// Dataset file (.json or .json.gz of positional rows); defaults to the embedded dataset
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// JSON table configuration (page sizes, query limit, compare mode)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Log filter, e.g. "info" or "citygrid_core=debug" (RUST_LOG wins if set)
    #[arg(long = "log-level", global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List the table columns
    Columns,

    /// Search the table and print one page, as the table view shows it
    Search {
        /// Free-text term matched against city and country names
        #[arg(default_value = "")]
        term: String,

        /// Sort keys, e.g. "country,population:desc"
        #[arg(short = 's', long = "sort", default_value = "")]
        sort: String,

        /// Page to show (1-based); clamped to the last page
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: usize,

        /// Rows per page (defaults to the configured page size)
        #[arg(short = 'n', long = "page-size")]
        page_size: Option<usize>,
    },

    /// Run the raw query function with an explicit offset and limit
    Query {
        /// Free-text term matched against city and country names
        #[arg(default_value = "")]
        term: String,

        #[arg(long = "offset", default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        #[arg(long = "limit", default_value_t = 10_000, allow_negative_numbers = true)]
        limit: i64,
    },
}
