//! Prompt templates for the plan-and-dispatch flow

use crate::dispatch::entities::Task;
use crate::dispatch::value_objects::WorkerKind;

/// Templates for the decomposer and for worker task framing
pub struct DispatchPromptTemplate;

impl DispatchPromptTemplate {
    /// System prompt for the planner agent
    pub fn planner_system() -> String {
        let kinds = WorkerKind::all()
            .iter()
            .map(|k| format!("`{}`", k))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"You are a planning assistant that decomposes an objective into discrete tasks
for specialized workers. Available worker kinds: {kinds}.

Respond with a single fenced block in exactly this format:

```plan
{{
  "tasks": [
    {{"id": "1", "kind": "researcher", "instruction": "what this worker should do"}}
  ]
}}
```

Rules:
- Every task gets a unique id and one of the listed kinds.
- Instructions must be self-contained; workers do not see each other's output.
- Emit nothing outside the fenced block."#
        )
    }

    /// User prompt asking the planner to decompose an objective
    pub fn planning(objective: &str) -> String {
        format!(
            r#"Decompose the following objective into tasks:

{objective}"#
        )
    }

    /// Two-part prompt for a worker executing one plan task: a framing
    /// section carrying the original objective for context, then the task's
    /// own instruction as the actionable part.
    ///
    /// The worker's role instructions are not repeated here — they are the
    /// session's system prompt.
    pub fn task_prompt(objective: &str, task: &Task) -> String {
        format!(
            r#"You are contributing one part of a larger objective:

{objective}

Complete only the task below. Do not attempt the other parts.

## Your task

{instruction}"#,
            instruction = task.instruction
        )
    }
}
