//! Rankings rendered as a plain `<table>`.
//!
//! Used when a page carries no embedded JSON. The projection column is
//! located by its header text and the player cell reads
//! `Name (TEAM - POS)`.

use super::{parse_points, RankingScraper, Selectors};
use crate::domain::{PlayerRecord, Position};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;

static PLAYER_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s+\(([^-)]+?)\s*-\s*([^)]+)\)").unwrap());

#[derive(Debug, Clone, Default)]
pub struct HtmlTableScraper {
    selectors: Selectors,
}

impl HtmlTableScraper {
    pub fn new(selectors: Selectors) -> Self {
        Self { selectors }
    }

    fn extract_table(&self, table: ElementRef, position: Position) -> Vec<PlayerRecord> {
        let headers: Vec<String> = table
            .select(&self.selectors.header)
            .map(|th| cell_text(th).to_lowercase())
            .collect();

        let Some(proj_idx) = headers.iter().position(|h| h.contains("proj")) else {
            return Vec::new();
        };
        let player_idx = headers.iter().position(|h| h == "player").unwrap_or(0);

        table
            .select(&self.selectors.row)
            .filter_map(|row| {
                let cells: Vec<String> = row.select(&self.selectors.cell).map(cell_text).collect();
                let (name, team) = split_player_cell(cells.get(player_idx)?);
                if name.is_empty() {
                    return None;
                }
                let points = parse_points(cells.get(proj_idx)?)?;
                let team = match team {
                    Some(team) => team,
                    None if position.is_team_unit() => name.clone(),
                    None => String::new(),
                };
                Some(PlayerRecord::new(name, team, position, points))
            })
            .collect()
    }
}

impl RankingScraper for HtmlTableScraper {
    fn extract_players(&self, document: &Html, position: Position) -> Vec<PlayerRecord> {
        let mut best: Vec<PlayerRecord> = Vec::new();

        for table in document.select(&self.selectors.table) {
            let records = self.extract_table(table, position);
            if records.len() > best.len() {
                best = records;
            }
        }

        debug!("Table scan found {} {} players", best.len(), position);
        best
    }
}

fn cell_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Splits `Justin Jefferson (MIN - WR)` into name and team.
fn split_player_cell(cell: &str) -> (String, Option<String>) {
    match PLAYER_CELL.captures(cell) {
        Some(caps) => (
            caps[1].trim().to_string(),
            Some(caps[2].trim().to_string()).filter(|t| !t.is_empty()),
        ),
        None => (cell.trim().to_string(), None),
    }
}
