use super::{PlayerRecord, Position};
use serde::{Deserialize, Serialize};

/// A position whose page could not be fetched or yielded no players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedPosition {
    pub position: Position,
    pub url: String,
    pub reason: String,
}

/// Everything one scraping run produced, before formatting.
#[derive(Debug, Default, Clone)]
pub struct ScrapeReport {
    pub players: Vec<PlayerRecord>,
    pub failed: Vec<FailedPosition>,
}

/// Shape of the `--json` output.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankingsPayload {
    pub players: Vec<PlayerRecord>,
    pub failed: Vec<FailedPosition>,
}
