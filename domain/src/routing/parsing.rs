//! Route decision parsing from classifier responses.
//!
//! Same contract as the plan parser: fenced or raw JSON in, `Option` out.
//! An unenumerated category makes the whole decision unusable.

use super::decision::RouteDecision;

/// Parse a [`RouteDecision`] from classifier response text.
///
/// Expected schema:
/// ```json
/// {"category": "billing | technical | account | general", "reasoning": "string"}
/// ```
///
/// Returns `None` on anything else — missing fields, an unknown category,
/// or a response that is not JSON at all.
pub fn parse_route_decision(response: &str) -> Option<RouteDecision> {
    if let Some(block) = extract_fenced_block(response) {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&block) {
            return parse_decision_json(&parsed);
        }
    }

    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(response) {
        return parse_decision_json(&parsed);
    }

    None
}

fn parse_decision_json(json: &serde_json::Value) -> Option<RouteDecision> {
    let category = json.get("category")?.as_str()?.parse().ok()?;
    let reasoning = json
        .get("reasoning")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    Some(RouteDecision {
        category,
        reasoning,
    })
}

fn extract_fenced_block(response: &str) -> Option<String> {
    let mut in_block = false;
    let mut current = String::new();

    for line in response.lines() {
        let trimmed = line.trim();
        if !in_block && (trimmed == "```route" || trimmed == "```json") {
            in_block = true;
            current.clear();
        } else if in_block && trimmed == "```" {
            return Some(current);
        } else if in_block {
            current.push_str(line);
            current.push('\n');
        }
    }

    None
}
