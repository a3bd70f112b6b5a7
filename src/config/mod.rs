use crate::config::cli::Args;
use crate::domain::Position;
use crate::error::{RankingError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod cli;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const DEFAULT_SOURCES: [(Position, &str); 5] = [
    (Position::QB, "https://www.fantasypros.com/nfl/rankings/ros-qb.php"),
    (Position::RB, "https://www.fantasypros.com/nfl/rankings/ros-half-point-ppr-rb.php"),
    (Position::WR, "https://www.fantasypros.com/nfl/rankings/ros-half-point-ppr-wr.php"),
    (Position::TE, "https://www.fantasypros.com/nfl/rankings/ros-half-point-ppr-te.php"),
    (Position::DST, "https://www.fantasypros.com/nfl/rankings/ros-dst.php"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct PositionSource {
    pub url: String,
    pub position: Position,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    pub positions: Vec<PositionSource>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            positions: DEFAULT_SOURCES
                .iter()
                .map(|(position, url)| PositionSource {
                    url: url.to_string(),
                    position: *position,
                })
                .collect(),
        }
    }
}

impl ScraperConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config: ScraperConfig = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        if config.positions.is_empty() {
            return Err(RankingError::Config(format!(
                "{} does not list any positions",
                path.display()
            )));
        }
        Ok(config)
    }
}

pub struct Config {
    pub args: Args,
    pub scraper_config: ScraperConfig,
    pub http_client: Client,
}

impl Config {
    pub fn new(args: Args) -> Result<Self> {
        let scraper_config = match &args.config_file {
            Some(path) => {
                info!("Loading position sources from {}", path.display());
                ScraperConfig::load(path)?
            }
            None => ScraperConfig::default(),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            args,
            scraper_config,
            http_client,
        })
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.args.delay_secs)
    }
}
