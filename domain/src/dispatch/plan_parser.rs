//! Plan parsing from decomposer responses.
//!
//! Extracts a structured [`Plan`] from the text a planner model returns —
//! either a fenced ```` ```plan ````/```` ```json ```` block or a raw JSON
//! body. Returns `Option`: the decomposer's caller must explicitly handle
//! absence; nothing is coerced into a default plan.

use crate::dispatch::entities::{Plan, Task};
use crate::dispatch::value_objects::{TaskId, WorkerKind};
use std::collections::HashSet;

/// Parse a plan from model response text.
///
/// Supports two formats:
/// 1. ` ```plan ` or ` ```json ` fenced code blocks containing JSON
/// 2. Raw JSON (the entire response is valid JSON)
///
/// Returns `None` if no valid plan is found, if the task list is empty,
/// if any task carries an unknown worker kind or a missing instruction,
/// or if task ids collide.
pub fn parse_plan(response: &str) -> Option<Plan> {
    if let Some(block) = extract_fenced_block(response) {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&block) {
            return parse_plan_json(&parsed);
        }
    }

    // Try parsing the entire response as JSON
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(response) {
        return parse_plan_json(&parsed);
    }

    None
}

/// Pull the contents of the first ```plan or ```json fenced block.
fn extract_fenced_block(response: &str) -> Option<String> {
    let mut in_block = false;
    let mut current = String::new();

    for line in response.lines() {
        let trimmed = line.trim();
        if !in_block && (trimmed == "```plan" || trimmed == "```json") {
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

/// Parse a plan from a JSON value.
///
/// Expected schema:
/// ```json
/// {
///   "tasks": [
///     {
///       "id": "string (optional, defaults to position)",
///       "kind": "researcher | coder | writer",
///       "instruction": "string"
///     }
///   ]
/// }
/// ```
pub fn parse_plan_json(json: &serde_json::Value) -> Option<Plan> {
    let tasks_json = json.get("tasks")?.as_array()?;

    // Empty tasks array is not a valid plan
    if tasks_json.is_empty() {
        return None;
    }

    let mut tasks = Vec::with_capacity(tasks_json.len());
    let mut seen_ids = HashSet::new();

    for (index, task_json) in tasks_json.iter().enumerate() {
        let id = task_json
            .get("id")
            .and_then(json_value_to_string)
            .unwrap_or_else(|| format!("{}", index + 1));

        // Duplicate ids would collide in the results map
        if !seen_ids.insert(id.clone()) {
            return None;
        }

        let kind: WorkerKind = task_json.get("kind")?.as_str()?.parse().ok()?;

        let instruction = task_json.get("instruction")?.as_str()?;
        if instruction.trim().is_empty() {
            return None;
        }

        tasks.push(Task::new(TaskId::new(id), kind, instruction));
    }

    Some(Plan::new(tasks))
}

/// Stringify ids that arrive as numbers; null and empty string become None.
fn json_value_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
