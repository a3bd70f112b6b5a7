//! Rankings embedded as JSON inside the page's `<script>` blocks.
//!
//! Rankings pages ship their table as a serialized object assigned to a
//! global (`var ecrData = {...};`) or as a `type="application/json"`
//! payload. The shape of that object changes without notice, so instead of
//! deserializing a fixed schema the scraper searches every parsed value for
//! arrays of player-like objects and keeps the one that yields the most
//! complete records.

mod candidates;
mod fields;
mod search;

use super::{RankingScraper, Selectors};
use crate::domain::{PlayerRecord, Position};
use scraper::Html;
use search::{Budget, MAX_TRAVERSAL_NODES};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct EmbeddedJsonScraper {
    selectors: Selectors,
}

impl EmbeddedJsonScraper {
    pub fn new(selectors: Selectors) -> Self {
        Self { selectors }
    }
}

impl RankingScraper for EmbeddedJsonScraper {
    fn extract_players(&self, document: &Html, position: Position) -> Vec<PlayerRecord> {
        let mut best: Vec<PlayerRecord> = Vec::new();
        let mut lists_seen = 0;

        for script in document.select(&self.selectors.script) {
            let typed_as_json = script
                .value()
                .attr("type")
                .is_some_and(|t| t.trim().to_ascii_lowercase().ends_with("json"));
            let text: String = script.text().collect();

            for candidate in candidates::json_candidates(&text, typed_as_json) {
                let Some(value) = candidates::parse_candidate(candidate) else {
                    continue;
                };

                let mut budget = Budget::new(MAX_TRAVERSAL_NODES);
                for list in search::candidate_lists(&value, &mut budget) {
                    lists_seen += 1;
                    let records = fields::extract_records(list, position, &mut budget);
                    if records.len() > best.len() {
                        best = records;
                    }
                }
                if budget.exhausted() {
                    debug!("Traversal budget ran out on a {} candidate", position);
                }
            }
        }

        if best.is_empty() {
            debug!("No player data found for {}", position);
        } else {
            debug!(
                "Extracted {} {} players from the best of {} candidate lists",
                best.len(),
                position,
                lists_seen
            );
        }

        best
    }
}

/// Extracts the ranked players for `position` from raw page HTML.
pub fn extract(html: &str, position: Position) -> Vec<PlayerRecord> {
    let document = Html::parse_document(html);
    EmbeddedJsonScraper::default().extract_players(&document, position)
}
