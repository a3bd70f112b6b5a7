use super::search::{find_by_tokens, Budget, PROJECTION_TOKENS};
use crate::domain::{PlayerRecord, Position};
use crate::infrastructure::scrapers::parse_points;
use serde_json::Value;

const NAME_KEYS: [&str; 4] = ["player_name", "name", "player", "display_name"];
const TEAM_UNIT_NAME_KEY: &str = "team_name";

const TEAM_KEYS: [&str; 6] = [
    "player_team_id",
    "team",
    "team_name",
    "short_name",
    "player_team",
    "nfl_team_id",
];

const POINTS_KEYS: [&str; 12] = [
    "r2p_pts",
    "ros_pts",
    "ros_points",
    "proj_pts",
    "proj_fpts",
    "pts",
    "pts_half",
    "points",
    "points_total",
    "fantasy_points",
    "fantasy_points_total",
    "fpts",
];

/// Container keys that usually wrap the number itself.
const WRAPPED_NUMBER_KEYS: [&str; 2] = ["value", "raw"];

/// Records for every element of `items` with a name and a numeric projection.
pub(crate) fn extract_records(
    items: &[Value],
    position: Position,
    budget: &mut Budget,
) -> Vec<PlayerRecord> {
    items
        .iter()
        .filter_map(|item| extract_record(item, position, budget))
        .collect()
}

fn extract_record(item: &Value, position: Position, budget: &mut Budget) -> Option<PlayerRecord> {
    let entry = item.as_object()?;

    let mut name_keys = NAME_KEYS.to_vec();
    if position.is_team_unit() {
        name_keys.push(TEAM_UNIT_NAME_KEY);
    }

    let name = name_keys
        .iter()
        .find_map(|key| entry.get(*key).and_then(non_empty_text))
        .or_else(|| find_by_tokens(item, &name_keys, budget, |v, _| non_empty_text(v)))?;

    let projected_points = POINTS_KEYS
        .iter()
        .find_map(|key| entry.get(*key).and_then(|v| resolve_number(v, budget)))
        .or_else(|| find_by_tokens(item, &PROJECTION_TOKENS, budget, resolve_number))?;

    let team = TEAM_KEYS
        .iter()
        .find_map(|key| entry.get(*key).and_then(team_text))
        .or_else(|| find_by_tokens(item, &TEAM_KEYS, budget, |v, _| team_text(v)))
        .or_else(|| position.is_team_unit().then(|| name.clone()))
        .unwrap_or_default();

    Some(PlayerRecord::new(name, team, position, projected_points))
}

fn non_empty_text(value: &Value) -> Option<String> {
    let text = value.as_str()?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Team identifiers show up as abbreviations or as numeric ids.
fn team_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        other => non_empty_text(other),
    }
}

/// Resolves a projection value, unwrapping containers.
///
/// Objects offer their `value`/`raw` children first, then every other child;
/// the first scalar that converts to a finite number wins.
pub(crate) fn resolve_number(value: &Value, budget: &mut Budget) -> Option<f64> {
    let mut stack = vec![value];

    while let Some(node) = stack.pop() {
        if !budget.spend() {
            return None;
        }

        match node {
            Value::Object(map) => {
                let preferred = WRAPPED_NUMBER_KEYS.iter().filter_map(|key| map.get(*key));
                let others = map
                    .iter()
                    .filter(|(key, _)| !WRAPPED_NUMBER_KEYS.contains(&key.as_str()))
                    .map(|(_, child)| child);
                let children: Vec<&Value> = preferred.chain(others).collect();
                stack.extend(children.into_iter().rev());
            }
            Value::Array(items) => stack.extend(items.iter().rev()),
            scalar => {
                if let Some(number) = scalar_number(scalar) {
                    return Some(number);
                }
            }
        }
    }

    None
}

fn scalar_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_points(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::search::MAX_TRAVERSAL_NODES;
    use super::*;
    use serde_json::json;

    fn budget() -> Budget {
        Budget::new(MAX_TRAVERSAL_NODES)
    }

    #[test]
    fn test_direct_keys() {
        let items = vec![json!({
            "player_name": " Justin Jefferson ",
            "player_team_id": "MIN",
            "r2p_pts": "230.5"
        })];
        let records = extract_records(&items, Position::WR, &mut budget());

        assert_eq!(
            records,
            vec![PlayerRecord::new(
                "Justin Jefferson".into(),
                "MIN".into(),
                Position::WR,
                230.5
            )]
        );
    }

    #[test]
    fn test_points_key_priority() {
        let items = vec![json!({"name": "A", "fpts": 1.0, "pts": 2.0, "ros_pts": 3.0})];
        let records = extract_records(&items, Position::RB, &mut budget());
        assert_eq!(records[0].projected_points, 3.0);
    }

    #[test]
    fn test_number_strings_and_containers() {
        let b = &mut budget();
        assert_eq!(resolve_number(&json!(" 1,234.5 "), b), Some(1234.5));
        assert_eq!(resolve_number(&json!({"value": 123.4}), b), Some(123.4));
        assert_eq!(resolve_number(&json!({"label": "n/a", "raw": "7"}), b), Some(7.0));
        assert_eq!(resolve_number(&json!({"display": "x", "inner": [null, "9.5"]}), b), Some(9.5));
        assert_eq!(resolve_number(&json!("NaN"), b), None);
        assert_eq!(resolve_number(&json!("inf"), b), None);
        assert_eq!(resolve_number(&json!(null), b), None);
        assert_eq!(resolve_number(&json!(true), b), None);
    }

    #[test]
    fn test_entries_without_name_or_points_are_dropped() {
        let items = vec![
            json!({"player_name": "", "pts": 10}),
            json!({"player_name": "No Points", "pts": null}),
            json!({"player_name": "Bad Points", "pts": "--"}),
            json!("not an object"),
            json!({"player_name": "Kept", "pts": 0}),
        ];
        let records = extract_records(&items, Position::TE, &mut budget());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Kept");
        assert_eq!(records[0].team, "");
        assert_eq!(records[0].projected_points, 0.0);
    }

    #[test]
    fn test_nested_fields_found_by_token_search() {
        let items = vec![json!({
            "id": 17,
            "bio": {"display_name": "Bijan Robinson", "nfl_team_id": 1},
            "projection": {"ros": {"fantasy_points": {"raw": "251.0"}}}
        })];
        let records = extract_records(&items, Position::RB, &mut budget());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bijan Robinson");
        assert_eq!(records[0].team, "1");
        assert_eq!(records[0].projected_points, 251.0);
    }

    #[test]
    fn test_team_unit_uses_team_name() {
        let items = vec![json!({"team_name": "Buffalo Bills", "pts": {"value": 110.1}})];

        let dst = extract_records(&items, Position::DST, &mut budget());
        assert_eq!(dst[0].name, "Buffalo Bills");
        assert_eq!(dst[0].team, "Buffalo Bills");

        // Outside DST the same key still reaches the name through token search.
        let wr = extract_records(&items, Position::WR, &mut budget());
        assert_eq!(wr[0].name, "Buffalo Bills");
    }

    #[test]
    fn test_team_unit_defaults_team_to_name() {
        let items = vec![json!({"display_name": "Dallas Cowboys", "fpts": "98"})];
        let records = extract_records(&items, Position::DST, &mut budget());
        assert_eq!(records[0].team, "Dallas Cowboys");
    }
}
