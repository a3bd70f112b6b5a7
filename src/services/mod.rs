pub(crate) mod publish;
pub(crate) mod ranking_service;
pub(crate) mod scraping;

pub use publish::PublishService;
pub use ranking_service::RankingService;
pub use scraping::ScrapingService;
