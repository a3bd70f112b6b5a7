use crate::config::PositionSource;
use crate::domain::{FailedPosition, PlayerRecord, Position, ScrapeReport};
use crate::error::Result;
use crate::infrastructure::{EmbeddedJsonScraper, HtmlTableScraper, RankingScraper, Selectors};
use crate::services::publish::dedupe_by_name;
use indicatif::ProgressBar;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

const NO_DATA_REASON: &str = "no player data found";

pub struct ScrapingService {
    client: Client,
    /// Tried in order; the first one that finds players wins.
    scrapers: Vec<Box<dyn RankingScraper>>,
    delay: Duration,
}

impl ScrapingService {
    pub fn new(client: Client, delay: Duration, selectors: Selectors) -> Self {
        info!("Created new Scraping service");
        Self {
            client,
            scrapers: vec![
                Box::new(EmbeddedJsonScraper::new(selectors.clone())) as Box<dyn RankingScraper>,
                Box::new(HtmlTableScraper::new(selectors)),
            ],
            delay,
        }
    }

    /// Fetches every source one after another, pausing `delay` after each
    /// request. A failing position is recorded and the run carries on.
    pub async fn scrape_all(
        &self,
        sources: &[PositionSource],
        progress: &ProgressBar,
    ) -> ScrapeReport {
        let mut report = ScrapeReport::default();

        for source in sources {
            progress.set_message(format!("Fetching {} rankings", source.position));
            info!("Fetching {} rankings from {}", source.position, source.url);

            match self.scrape_position(source).await {
                Ok(players) if players.is_empty() => {
                    warn!("No data found for {}", source.position);
                    report.failed.push(failure(source, NO_DATA_REASON.to_string()));
                }
                Ok(players) => {
                    let players = dedupe_by_name(players);
                    info!("Scraped {} {} players", players.len(), source.position);
                    report.players.extend(players);
                }
                Err(e) => {
                    warn!("Error fetching {}: {}", source.position, e);
                    report.failed.push(failure(source, e.to_string()));
                }
            }
            progress.inc(1);
            sleep(self.delay).await;
        }

        report
    }

    async fn scrape_position(&self, source: &PositionSource) -> Result<Vec<PlayerRecord>> {
        let body = self
            .client
            .get(&source.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(self.extract(&body, source.position))
    }

    fn extract(&self, body: &str, position: Position) -> Vec<PlayerRecord> {
        let document = Html::parse_document(body);
        self.scrapers
            .iter()
            .map(|scraper| scraper.extract_players(&document, position))
            .find(|players| !players.is_empty())
            .unwrap_or_default()
    }
}

fn failure(source: &PositionSource, reason: String) -> FailedPosition {
    FailedPosition {
        position: source.position,
        url: source.url.clone(),
        reason,
    }
}
