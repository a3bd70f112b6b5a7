use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy positions with a rest-of-season rankings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    // Declared alphabetically so the derived ordering matches label order.
    DST,
    QB,
    RB,
    TE,
    WR,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::DST,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DST => "DST",
        }
    }

    /// Defense units are keyed by team rather than by an individual player.
    pub fn is_team_unit(&self) -> bool {
        matches!(self, Position::DST)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "DST" | "D/ST" | "DEF" => Ok(Position::DST),
            other => Err(format!("unknown position: {other}")),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.as_str().to_string()
    }
}

/// One ranked player as scraped from a rankings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "player_name")]
    pub name: String,
    pub team: String,
    pub position: Position,
    #[serde(rename = "proj_pts")]
    pub projected_points: f64,
}

impl PlayerRecord {
    pub fn new(name: String, team: String, position: Position, projected_points: f64) -> Self {
        Self {
            name,
            team,
            position,
            projected_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parse_is_case_insensitive() {
        assert_eq!("wr".parse::<Position>(), Ok(Position::WR));
        assert_eq!(" Dst ".parse::<Position>(), Ok(Position::DST));
        assert!("K".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_orders_by_label() {
        let mut positions = Position::ALL.to_vec();
        positions.sort();
        let labels: Vec<&str> = positions.iter().map(Position::as_str).collect();
        assert_eq!(labels, vec!["DST", "QB", "RB", "TE", "WR"]);
    }

    #[test]
    fn test_player_record_json_field_names() {
        let record = PlayerRecord::new("Josh Allen".into(), "BUF".into(), Position::QB, 301.2);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["player_name"], "Josh Allen");
        assert_eq!(value["team"], "BUF");
        assert_eq!(value["position"], "QB");
        assert_eq!(value["proj_pts"], 301.2);
    }
}
