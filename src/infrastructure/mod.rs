mod scrapers;
mod storage;

pub use scrapers::{
    embedded_json::{extract, EmbeddedJsonScraper},
    html_table::HtmlTableScraper,
    RankingScraper, Selectors,
};
pub use storage::csv_store::CsvStore;
