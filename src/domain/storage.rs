use super::PlayerRecord;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    /// Persist the final rankings table and return where it was written.
    fn save_rankings(&self, players: &[PlayerRecord], path: Option<&Path>) -> Result<PathBuf>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const RANKINGS_PREFIX: &'static str = "fantasypros_rankings";
    pub const TIMESTAMP_FORMAT: &'static str = "%Y%m%d_%H%M%S";
}
