//! Turning raw `<script>` bodies into JSON values.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Upper bound on parse attempts while trimming a damaged candidate.
const MAX_REPAIR_ATTEMPTS: usize = 64;

/// Globals the rankings pages are known to assign their data to, declared
/// directly or hung off a namespace object (`window.`, `FP.`, ...).
static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:\b(?:var|let|const)\s+|\b(?:[A-Za-z_$][\w$]*\.)+)(?:ecrData|data|playerData|rankingsData)\s*=",
    )
    .unwrap()
});

/// Any declaration; only kept when its value mentions a `"players"` key.
static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:var|let|const)\s+[A-Za-z_$][\w$]*\s*=").unwrap());

const PLAYERS_KEY: &str = "\"players\"";

/// Slices of `text` that may hold a serialized JSON value.
///
/// Script blocks typed as JSON are taken whole. Otherwise every known
/// assignment contributes the text after its `=`, as does any other
/// declaration whose value mentions `"players"`. Scripts without either fall
/// back to the outermost `{ ... }` span.
pub(crate) fn json_candidates(text: &str, typed_as_json: bool) -> Vec<&str> {
    if typed_as_json {
        return vec![text.trim()];
    }

    let mut candidates: Vec<&str> = Vec::new();
    for assignment in ASSIGNMENT.find_iter(text) {
        if let Some(candidate) = assigned_value(&text[assignment.end()..]) {
            candidates.push(candidate);
        }
    }

    for declaration in DECLARATION.find_iter(text) {
        let Some(candidate) = assigned_value(&text[declaration.end()..]) else {
            continue;
        };
        let seen = candidates.iter().any(|c| c.as_ptr() == candidate.as_ptr());
        if !seen && candidate.contains(PLAYERS_KEY) {
            candidates.push(candidate);
        }
    }

    if candidates.is_empty() {
        if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
            if start < end {
                candidates.push(&text[start..=end]);
            }
        }
    }

    candidates
}

/// The object or array literal following an assignment's `=`.
fn assigned_value(rest: &str) -> Option<&str> {
    let rest = rest.trim();
    let rest = rest.strip_suffix(';').unwrap_or(rest);
    rest.find(['{', '[']).map(|start| &rest[start..])
}

/// Parses a candidate, trimming trailing junk until a JSON value comes out.
///
/// Each round cuts the text back to its last `}` or `]` and reads the
/// leading value; a failed round drops that closing character and tries
/// again. Returns `None` once nothing parseable remains.
pub(crate) fn parse_candidate(candidate: &str) -> Option<Value> {
    let mut text = candidate;

    for _ in 0..MAX_REPAIR_ATTEMPTS {
        text = text.trim_end_matches(|c: char| c != '}' && c != ']');
        if text.is_empty() {
            return None;
        }

        let mut values = serde_json::Deserializer::from_str(text).into_iter::<Value>();
        match values.next() {
            Some(Ok(value)) => return Some(value),
            Some(Err(e)) => debug!("Candidate of {} bytes did not parse: {}", text.len(), e),
            None => return None,
        }

        text = &text[..text.len() - 1];
    }

    debug!("Giving up on candidate after {} repair attempts", MAX_REPAIR_ATTEMPTS);
    None
}
