use clap::Parser;
use ros_rankings::config::cli::Args;
use ros_rankings::config::Config;
use ros_rankings::error::Result;
use ros_rankings::infrastructure::{CsvStore, Selectors};
use ros_rankings::services::{PublishService, RankingService, ScrapingService};
use std::sync::Arc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = Config::new(args)?;
    let selectors = Selectors::new(&config.args.script_selector, &config.args.table_selector)?;
    let scraping = ScrapingService::new(config.http_client.clone(), config.delay(), selectors);
    let publish = PublishService::new(Arc::new(CsvStore::new(".")));

    let service = RankingService::new(config, scraping, publish);
    service.process().await?;

    info!("Scraping completed successfully!");
    Ok(())
}

/// Logs go to stderr so `--json` output on stdout stays machine readable.
fn init_tracing(log_level: &str) {
    let level = log_level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
