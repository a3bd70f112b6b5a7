use crate::config::Config;
use crate::error::{RankingError, Result};
use crate::services::{publish::PublishService, scraping::ScrapingService};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};

pub struct RankingService {
    config: Config,
    scraping: ScrapingService,
    publish: PublishService,
}

impl RankingService {
    pub fn new(config: Config, scraping: ScrapingService, publish: PublishService) -> Self {
        Self {
            config,
            scraping,
            publish,
        }
    }

    pub async fn process(&self) -> Result<()> {
        let sources = &self.config.scraper_config.positions;
        info!("Starting rankings scrape for {} positions", sources.len());

        let progress = self.progress_bar(sources.len() as u64)?;
        let report = self.scraping.scrape_all(sources, &progress).await;
        progress.finish_and_clear();

        for failed in &report.failed {
            warn!("{} failed ({}): {}", failed.position, failed.url, failed.reason);
        }

        let players = self.publish.prepare(report.players);

        // Always emit a payload in JSON mode so callers can read `failed`.
        if self.config.args.json {
            return self.publish.print_json(players, report.failed);
        }

        if players.is_empty() {
            error!("Failed to scrape any data");
            return Err(RankingError::NoData);
        }

        self.publish
            .write_csv(&players, self.config.args.output.as_deref())?;
        info!("Rankings ready: {} players", players.len());

        Ok(())
    }

    /// JSON mode keeps stderr quiet apart from logs.
    fn progress_bar(&self, len: u64) -> Result<ProgressBar> {
        if self.config.args.json {
            return Ok(ProgressBar::hidden());
        }

        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| RankingError::Other(e.to_string()))?,
        );
        Ok(pb)
    }
}
