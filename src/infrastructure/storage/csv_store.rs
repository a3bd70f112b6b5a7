use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::PlayerRecord;
use crate::error::Result;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

const HEADER: [&str; 4] = ["Player", "Team", "Position", "Proj. Fpts"];

/// Writes the rankings table as a CSV file.
#[derive(Clone)]
pub struct CsvStore {
    output_dir: PathBuf,
}

impl CsvStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn default_path(&self) -> PathBuf {
        let timestamp = Local::now().format(StorageKeys::TIMESTAMP_FORMAT);
        self.output_dir
            .join(format!("{}_{}.csv", StorageKeys::RANKINGS_PREFIX, timestamp))
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl Storage for CsvStore {
    fn save_rankings(&self, players: &[PlayerRecord], path: Option<&Path>) -> Result<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(|| self.default_path());
        self.ensure_parent(&path)?;

        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(HEADER)?;
        for player in players {
            let points = format_points(player.projected_points);
            writer.write_record([
                player.name.as_str(),
                player.team.as_str(),
                player.position.as_str(),
                points.as_str(),
            ])?;
        }
        writer.flush()?;

        Ok(path)
    }
}

/// Whole numbers keep one decimal so the column reads as fantasy points.
fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{points:.1}")
    } else {
        points.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path());
        let players = vec![
            PlayerRecord::new("Ja'Marr Chase".into(), "CIN".into(), Position::WR, 240.5),
            PlayerRecord::new("Kansas City Chiefs, DST".into(), "KC".into(), Position::DST, 101.0),
        ];

        let path = store
            .save_rankings(&players, Some(&dir.path().join("out/rankings.csv")))
            .unwrap();
        let written = fs::read_to_string(path).unwrap();

        assert_eq!(
            written,
            "Player,Team,Position,Proj. Fpts\n\
             Ja'Marr Chase,CIN,WR,240.5\n\
             \"Kansas City Chiefs, DST\",KC,DST,101.0\n"
        );
    }

    #[test]
    fn test_whole_points_keep_a_decimal() {
        assert_eq!(format_points(220.0), "220.0");
        assert_eq!(format_points(0.0), "0.0");
        assert_eq!(format_points(230.5), "230.5");
        assert_eq!(format_points(98.25), "98.25");
    }

    #[test]
    fn test_default_file_name_is_timestamped() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path());

        let path = store.save_rankings(&[], None).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();

        assert!(name.starts_with("fantasypros_rankings_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "fantasypros_rankings_20240101_120000.csv".len());
        assert!(path.exists());
    }
}
