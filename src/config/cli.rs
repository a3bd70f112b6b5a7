use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rest-of-season fantasy football rankings scraper")]
pub struct Args {
    /// Print the rankings as JSON on stdout instead of writing a CSV file
    #[arg(long)]
    pub json: bool,

    /// CSV destination (defaults to a timestamped file in the current directory)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// JSON file listing the position pages to scrape
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Seconds to wait after each page request
    #[arg(long, default_value_t = 2)]
    pub delay_secs: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// CSS selector for the script blocks searched for embedded rankings JSON
    #[arg(long, default_value = "script")]
    pub script_selector: String,

    /// CSS selector for rankings tables, used when a page has no embedded JSON
    #[arg(long, default_value = "table")]
    pub table_selector: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "RANKINGS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
