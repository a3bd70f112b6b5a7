//! Rest-of-season fantasy football rankings scraper.
//!
//! Fetches one rankings page per position, pulls the player table out of
//! the JSON embedded in the page, and publishes it as CSV or JSON.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;

pub use domain::{PlayerRecord, Position};
pub use infrastructure::extract;
