//! Dispatch domain entities

use super::value_objects::{RunId, TaskId, TaskOutcome, WorkerKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single task within a plan.
///
/// Immutable once the decomposer has produced it; execution results are
/// recorded in [`OrchestrationState`], never written back into the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier within the plan
    pub id: TaskId,
    /// Which worker specialization executes this task
    pub kind: WorkerKind,
    /// Instruction text handed to the worker as the user turn
    pub instruction: String,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        kind: WorkerKind,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            instruction: instruction.into(),
        }
    }
}

/// An ordered decomposition of an objective into typed tasks.
///
/// Created once per objective and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Ordered list of tasks to dispatch
    pub tasks: Vec<Task>,
}

impl Plan {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether a task id originated from this plan.
    pub fn contains(&self, id: &TaskId) -> bool {
        self.tasks.iter().any(|t| &t.id == id)
    }

    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|t| t.id.clone()).collect()
    }
}

/// State of one plan-and-dispatch run (Entity).
///
/// Mutated incrementally as tasks complete and handed to the state store
/// after each mutation. Persistence is not atomic across the run: a crash
/// mid-run leaves a plan with a partial results map, which is an accepted,
/// observable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationState {
    /// Identifier for this run; doubles as the persistence key
    pub run_id: RunId,
    /// The user's original objective
    pub objective: String,
    /// The plan, once decomposition has succeeded
    pub plan: Option<Plan>,
    /// Task outcomes keyed by task id; keys are always a subset of the
    /// plan's task ids
    pub results: BTreeMap<TaskId, TaskOutcome>,
}

impl OrchestrationState {
    /// Creates a fresh state for an objective, with no plan and no results.
    pub fn new(run_id: impl Into<RunId>, objective: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            objective: objective.into(),
            plan: None,
            results: BTreeMap::new(),
        }
    }

    /// Sets the plan. Called exactly once per run, after decomposition.
    pub fn set_plan(&mut self, plan: Plan) {
        self.plan = Some(plan);
    }

    /// Records one task's outcome.
    pub fn record(&mut self, id: TaskId, outcome: TaskOutcome) {
        self.results.insert(id, outcome);
    }

    /// Completed-vs-total progress over the plan, if one exists.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.plan.as_ref().map(|p| p.len()).unwrap_or(0);
        (self.results.len(), total)
    }
}
