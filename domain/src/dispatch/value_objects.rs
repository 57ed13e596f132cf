//! Dispatch domain value objects - immutable types for plan-and-dispatch.
//!
//! # Identifiers
//! - [`RunId`] - Unique identifier for an orchestration run
//! - [`TaskId`] - Unique identifier for a task within a plan
//!
//! # Execution Data
//! - [`WorkerKind`] - Statically enumerated worker specializations
//! - [`TaskOutcome`] - Tagged outcome of one task execution

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Unique identifier for an orchestration run.
///
/// Each plan-and-dispatch execution has its own ID, used as the state
/// persistence key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(String);

impl RunId {
    /// Creates a RunId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new unique RunId from the current clock.
    pub fn generate() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        Self(format!("run-{:016x}", nanos as u64))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for RunId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a task within a plan.
///
/// Tasks are numbered sequentially within a plan (e.g., "1", "2", "3").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a TaskId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for TaskId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Worker specializations a task can be assigned to.
///
/// The set is static: the decomposer may only emit these kinds, and an
/// unknown kind in its output rejects the whole plan rather than being
/// coerced to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerKind {
    /// Gathers information and summarizes findings
    Researcher,
    /// Writes and explains code
    Coder,
    /// Produces prose deliverables
    Writer,
}

impl WorkerKind {
    pub fn as_str(&self) -> &str {
        match self {
            WorkerKind::Researcher => "researcher",
            WorkerKind::Coder => "coder",
            WorkerKind::Writer => "writer",
        }
    }

    /// All kinds, in a stable order — used to build worker pools and
    /// to list valid kinds in the decomposer prompt.
    pub fn all() -> [WorkerKind; 3] {
        [WorkerKind::Researcher, WorkerKind::Coder, WorkerKind::Writer]
    }
}

impl std::fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkerKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "researcher" => Ok(WorkerKind::Researcher),
            "coder" => Ok(WorkerKind::Coder),
            "writer" => Ok(WorkerKind::Writer),
            other => Err(DomainError::UnknownWorkerKind(other.to_string())),
        }
    }
}

/// Outcome of a single task execution.
///
/// A tagged variant rather than a sentinel string: a worker failure is
/// distinguishable from genuine output that happens to contain error text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "output", rename_all = "lowercase")]
pub enum TaskOutcome {
    /// Worker produced output for this task
    Completed(String),
    /// Worker invocation failed; the message is diagnostic, not content
    Failed(String),
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Completed(_))
    }

    /// The textual payload, regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            TaskOutcome::Completed(s) | TaskOutcome::Failed(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_id() {
        let id = RunId::new("run-1");
        assert_eq!(id.as_str(), "run-1");

        let generated = RunId::generate();
        assert!(generated.as_str().starts_with("run-"));
    }

    #[test]
    fn test_task_id() {
        let id: TaskId = "task-1".into();
        assert_eq!(id.as_str(), "task-1");
    }

    #[test]
    fn test_worker_kind_parse() {
        assert_eq!("coder".parse::<WorkerKind>().unwrap(), WorkerKind::Coder);
        assert_eq!(
            "researcher".parse::<WorkerKind>().unwrap(),
            WorkerKind::Researcher
        );
        assert!("plumber".parse::<WorkerKind>().is_err());
        // No case coercion: the decomposer schema demands lowercase
        assert!("Coder".parse::<WorkerKind>().is_err());
    }

    #[test]
    fn test_task_outcome() {
        let ok = TaskOutcome::Completed("result text".to_string());
        assert!(ok.is_success());
        assert_eq!(ok.text(), "result text");

        // A success whose content mentions "Error" stays a success
        let tricky = TaskOutcome::Completed("Error handling guide".to_string());
        assert!(tricky.is_success());

        let failed = TaskOutcome::Failed("connection refused".to_string());
        assert!(!failed.is_success());
    }

    #[test]
    fn test_task_outcome_serde_tagged() {
        let failed = TaskOutcome::Failed("boom".to_string());
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["output"], "boom");

        let back: TaskOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(back, failed);
    }
}
