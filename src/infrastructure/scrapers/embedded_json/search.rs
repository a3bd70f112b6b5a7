//! Heuristic search over parsed JSON for lists of player entries.

use rustc_hash::FxHashSet;
use serde_json::Value;
use tracing::debug;

/// Key fragments that suggest a field holds a player (or team unit) name.
pub(crate) const NAME_TOKENS: [&str; 4] = ["player", "name", "team_name", "display_name"];

/// Key fragments that suggest a field holds a point projection.
pub(crate) const PROJECTION_TOKENS: [&str; 4] = ["pts", "points", "proj", "fpts"];

/// Node allowance shared by every traversal over one parsed candidate.
pub(crate) const MAX_TRAVERSAL_NODES: usize = 250_000;

#[derive(Debug)]
pub(crate) struct Budget {
    remaining: usize,
}

impl Budget {
    pub(crate) fn new(nodes: usize) -> Self {
        Self { remaining: nodes }
    }

    /// Accounts for one visited node; `false` once the allowance is used up.
    pub(crate) fn spend(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub(crate) fn exhausted(&self) -> bool {
        self.remaining == 0
    }
}

fn is_container(value: &&Value) -> bool {
    value.is_object() || value.is_array()
}

/// Every array under `root` holding at least one player-like object,
/// in depth-first pre-order.
pub(crate) fn candidate_lists<'a>(root: &'a Value, budget: &mut Budget) -> Vec<&'a [Value]> {
    let mut found = Vec::new();
    let mut visited: FxHashSet<*const Vec<Value>> = FxHashSet::default();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if !budget.spend() {
            debug!("Traversal budget exhausted after {} candidate lists", found.len());
            break;
        }

        match node {
            Value::Array(items) => {
                if !visited.insert(items as *const Vec<Value>) {
                    continue;
                }
                if items.iter().any(|item| looks_like_player(item, budget)) {
                    found.push(items.as_slice());
                }
                stack.extend(items.iter().rev().filter(is_container));
            }
            Value::Object(map) => stack.extend(map.values().rev().filter(is_container)),
            _ => {}
        }
    }

    found
}

/// An object is player-like when it (or anything nested in it) has both a
/// name-ish key and a projection-ish key.
pub(crate) fn looks_like_player(value: &Value, budget: &mut Budget) -> bool {
    value.is_object()
        && find_by_tokens(value, &NAME_TOKENS, budget, |_, _| Some(())).is_some()
        && find_by_tokens(value, &PROJECTION_TOKENS, budget, |_, _| Some(())).is_some()
}

/// Searches `value` for a field whose lowercased key contains one of
/// `tokens` and whose value `accept` turns into a result.
///
/// Tokens are tried in order, so earlier tokens win over shallower matches
/// of later ones. Within a token the search is depth-first in document order.
pub(crate) fn find_by_tokens<T>(
    value: &Value,
    tokens: &[&str],
    budget: &mut Budget,
    mut accept: impl FnMut(&Value, &mut Budget) -> Option<T>,
) -> Option<T> {
    for token in tokens {
        let mut stack = vec![value];

        while let Some(node) = stack.pop() {
            if !budget.spend() {
                return None;
            }

            match node {
                Value::Object(map) => {
                    for (key, child) in map {
                        if key.to_ascii_lowercase().contains(token) {
                            if let Some(found) = accept(child, budget) {
                                return Some(found);
                            }
                        }
                    }
                    stack.extend(map.values().rev().filter(is_container));
                }
                Value::Array(items) => stack.extend(items.iter().rev().filter(is_container)),
                _ => {}
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn budget() -> Budget {
        Budget::new(MAX_TRAVERSAL_NODES)
    }

    #[test]
    fn test_player_like_needs_name_and_projection() {
        let b = &mut budget();
        assert!(looks_like_player(&json!({"player_name": "A", "r2p_pts": "1"}), b));
        assert!(looks_like_player(&json!({"info": {"Display_Name": "A"}, "stats": [{"fpts": 2}]}), b));
        assert!(!looks_like_player(&json!({"player_name": "A", "rank": 1}), b));
        assert!(!looks_like_player(&json!({"pts": 1}), b));
        assert!(!looks_like_player(&json!(["player_name", "pts"]), b));
    }

    #[test]
    fn test_candidate_lists_finds_nested_arrays_in_order() {
        let doc = json!({
            "meta": {"ids": [1, 2, 3]},
            "tiers": [
                {"players": [{"name": "A", "pts": 1}, {"name": "B", "pts": 2}]},
                {"players": [{"name": "C", "pts": 3}]}
            ]
        });
        let lists = candidate_lists(&doc, &mut budget());

        // The tier list qualifies through its nested players, then each inner list.
        assert_eq!(lists.len(), 3);
        assert_eq!(lists[0].len(), 2);
        assert_eq!(lists[1][0]["players"], Value::Null);
        assert_eq!(lists[1][0]["name"], "A");
        assert_eq!(lists[2][0]["name"], "C");
    }

    #[test]
    fn test_candidate_lists_stops_when_budget_runs_out() {
        let doc = json!({"players": [{"name": "A", "pts": 1}]});
        assert!(candidate_lists(&doc, &mut Budget::new(1)).is_empty());
    }

    #[test]
    fn test_find_by_tokens_prefers_earlier_tokens() {
        let entry = json!({"player_team_id": "MIN", "bio": {"name": "Justin Jefferson"}});
        let found = find_by_tokens(&entry, &["name", "player"], &mut budget(), |v, _| {
            v.as_str().map(str::to_string)
        });
        assert_eq!(found.as_deref(), Some("Justin Jefferson"));
    }

    #[test]
    fn test_budget_counts_down() {
        let mut b = Budget::new(2);
        assert!(b.spend());
        assert!(b.spend());
        assert!(!b.spend());
        assert!(b.exhausted());
    }
}
