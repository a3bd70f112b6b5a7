mod player;
mod report;
pub mod storage;

pub use player::{PlayerRecord, Position};
pub use report::{FailedPosition, RankingsPayload, ScrapeReport};
