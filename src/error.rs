use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankingError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("No player data was scraped")]
    NoData,
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RankingError>;
