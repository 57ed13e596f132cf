//! Console output formatting for each subcommand's outcome.

use conductor_application::{DispatchOutcome, RefineOutcome, RouteOutcome};
use conductor_infrastructure::HealthStatus;

/// Format a dispatch run: one line per task, in plan order.
pub fn format_dispatch(outcome: &DispatchOutcome) -> String {
    let mut out = String::new();
    let state = &outcome.state;

    out.push_str(&format!("Run: {}\n", state.run_id));
    let (done, total) = state.progress();
    out.push_str(&format!("Tasks completed: {}/{}\n", done, total));

    if let Some(plan) = &state.plan {
        for task in &plan.tasks {
            match state.results.get(&task.id) {
                Some(result) if result.is_success() => {
                    out.push_str(&format!("\n[{}] {} — ok\n{}\n", task.id, task.kind, result.text()));
                }
                Some(result) => {
                    out.push_str(&format!(
                        "\n[{}] {} — FAILED\n{}\n",
                        task.id,
                        task.kind,
                        result.text()
                    ));
                }
                None => {
                    out.push_str(&format!("\n[{}] {} — not executed\n", task.id, task.kind));
                }
            }
        }
    }

    out
}

pub fn format_dispatch_json(outcome: &DispatchOutcome) -> String {
    serde_json::to_string_pretty(&outcome.state).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_route(outcome: &RouteOutcome) -> String {
    match outcome.category {
        Some(category) => format!("Category: {}\n\n{}", category, outcome.response),
        None => outcome.response.clone(),
    }
}

pub fn format_route_json(outcome: &RouteOutcome) -> String {
    let json = serde_json::json!({
        "category": outcome.category.map(|c| c.to_string()),
        "response": outcome.response,
    });
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_refine(outcome: &RefineOutcome) -> String {
    let verdict = if outcome.quality.passes {
        "passed".to_string()
    } else {
        format!(
            "did not pass after {} regeneration(s):\n- {}",
            outcome.turns_used,
            outcome.quality.feedback.join("\n- ")
        )
    };
    format!("Quality gate {}\n\n{}", verdict, outcome.content)
}

pub fn format_refine_json(outcome: &RefineOutcome) -> String {
    let json = serde_json::json!({
        "content": outcome.content,
        "quality": outcome.quality,
        "turns_used": outcome.turns_used,
    });
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_health(status: &HealthStatus) -> String {
    if status.healthy {
        format!("ok — {}", status.detail)
    } else {
        format!("unreachable — {}", status.detail)
    }
}
