use crate::domain::{PlayerRecord, Position};
use crate::error::{RankingError, Result};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

pub(crate) mod embedded_json;
pub(crate) mod html_table;

static SCRIPT_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("script").unwrap());
static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static HEADER_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("thead th").unwrap());
static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody tr").unwrap());
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());

pub trait RankingScraper: Send + Sync {
    /// Pull every ranked player for `position` out of an already parsed page.
    ///
    /// Scrapers are best-effort: a page without usable data yields an empty list.
    fn extract_players(&self, document: &Html, position: Position) -> Vec<PlayerRecord>;
}

#[derive(Debug, Clone)]
pub struct Selectors {
    pub script: Selector,
    pub table: Selector,
    pub header: Selector,
    pub row: Selector,
    pub cell: Selector,
}

impl Selectors {
    pub fn new(script_selector: &str, table_selector: &str) -> Result<Self> {
        let script = Selector::parse(script_selector)
            .map_err(|e| RankingError::Selector(e.to_string()))?;
        let table = Selector::parse(table_selector)
            .map_err(|e| RankingError::Selector(e.to_string()))?;

        Ok(Self {
            script,
            table,
            ..Self::default()
        })
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            script: SCRIPT_SELECTOR.clone(),
            table: TABLE_SELECTOR.clone(),
            header: HEADER_SELECTOR.clone(),
            row: ROW_SELECTOR.clone(),
            cell: CELL_SELECTOR.clone(),
        }
    }
}

/// Reads a projection such as `" 1,234.5 "`; only finite values count.
pub(crate) fn parse_points(text: &str) -> Option<f64> {
    let number = text.replace(',', "").trim().parse::<f64>().ok()?;
    number.is_finite().then_some(number)
}
