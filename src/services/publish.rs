use crate::domain::storage::Storage;
use crate::domain::{FailedPosition, PlayerRecord, Position, RankingsPayload};
use crate::error::Result;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

const TOP_PLAYERS: usize = 10;

/// Keeps the first record for every player name.
pub(crate) fn dedupe_by_name(players: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
    let mut seen = HashSet::new();
    players
        .into_iter()
        .filter(|p| seen.insert(p.name.clone()))
        .collect()
}

/// Position first, then highest projection first.
pub(crate) fn sort_rankings(players: &mut [PlayerRecord]) {
    players.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then_with(|| b.projected_points.total_cmp(&a.projected_points))
    });
}

pub struct PublishService {
    store: Arc<dyn Storage>,
}

impl PublishService {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self { store }
    }

    /// Combines the per-position results into the final table.
    pub fn prepare(&self, players: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
        let mut players = dedupe_by_name(players);
        sort_rankings(&mut players);
        players
    }

    pub fn write_csv(&self, players: &[PlayerRecord], path: Option<&Path>) -> Result<PathBuf> {
        let path = self.store.save_rankings(players, path)?;
        info!("File saved: {}", path.display());
        self.log_summary(players);
        Ok(path)
    }

    pub fn json_payload(
        &self,
        players: Vec<PlayerRecord>,
        failed: Vec<FailedPosition>,
    ) -> Result<String> {
        Ok(serde_json::to_string(&RankingsPayload { players, failed })?)
    }

    pub fn print_json(
        &self,
        players: Vec<PlayerRecord>,
        failed: Vec<FailedPosition>,
    ) -> Result<()> {
        println!("{}", self.json_payload(players, failed)?);
        Ok(())
    }

    fn log_summary(&self, players: &[PlayerRecord]) {
        info!("Total players: {}", players.len());

        let mut counts: BTreeMap<Position, usize> = BTreeMap::new();
        for player in players {
            *counts.entry(player.position).or_default() += 1;
        }
        for (position, count) in &counts {
            info!("  {}: {} players", position, count);
        }

        if let Some(stats) = ProjectionStats::from_players(players) {
            info!(
                "Projected points: highest {:.1}, lowest {:.1}, average {:.1}",
                stats.highest, stats.lowest, stats.average
            );
        }

        let mut top: Vec<&PlayerRecord> = players.iter().collect();
        top.sort_by(|a, b| b.projected_points.total_cmp(&a.projected_points));
        info!("Top {} by projected points:", TOP_PLAYERS);
        for player in top.into_iter().take(TOP_PLAYERS) {
            info!(
                "  {:<28} {:<4} {:<4} {:>7.1}",
                player.name, player.team, player.position, player.projected_points
            );
        }
    }
}

#[derive(Debug, PartialEq)]
struct ProjectionStats {
    highest: f64,
    lowest: f64,
    average: f64,
}

impl ProjectionStats {
    fn from_players(players: &[PlayerRecord]) -> Option<Self> {
        if players.is_empty() {
            return None;
        }
        let points = players.iter().map(|p| p.projected_points);
        Some(Self {
            highest: points.clone().fold(f64::MIN, f64::max),
            lowest: points.clone().fold(f64::MAX, f64::min),
            average: points.sum::<f64>() / players.len() as f64,
        })
    }
}
