//! Plan-and-dispatch use case.
//!
//! Decomposes an objective into a typed plan via a single planner call,
//! then executes each task sequentially against the worker registered for
//! its kind, accumulating outcomes keyed by task id.
//!
//! Failure policy: a decomposition failure aborts the whole run (no partial
//! dispatch without a plan); a single worker failure is recorded as that
//! task's outcome and never aborts sibling tasks. State is handed to the
//! state store after the plan lands and after every task outcome.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::GatewayError;
use crate::ports::state_store::StateStore;
use crate::workers::{Worker, WorkerPool};
use conductor_domain::{
    DispatchPromptTemplate, DomainError, OrchestrationState, Plan, RunId, TaskOutcome, parse_plan,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during a dispatch run.
///
/// Per-task worker failures are not here: they are data
/// ([`TaskOutcome::Failed`]), recorded in the results map.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Planning failed: decomposer produced no usable plan")]
    PlanningFailed,

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result of a dispatch run: the full orchestration state, exposing the
/// results map and the plan for external callers.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    pub state: OrchestrationState,
}

impl DispatchOutcome {
    /// Outcomes keyed by task id, in plan order.
    pub fn results(
        &self,
    ) -> &std::collections::BTreeMap<conductor_domain::TaskId, TaskOutcome> {
        &self.state.results
    }
}

/// Use case composing the task decomposer with the worker pool.
pub struct DispatchUseCase {
    planner: Arc<Worker>,
    pool: Arc<WorkerPool>,
    state_store: Arc<dyn StateStore>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl DispatchUseCase {
    pub fn new(
        planner: Arc<Worker>,
        pool: Arc<WorkerPool>,
        state_store: Arc<dyn StateStore>,
        conversation_logger: Arc<dyn ConversationLogger>,
    ) -> Self {
        Self {
            planner,
            pool,
            state_store,
            conversation_logger,
        }
    }

    /// Run the whole pattern: decompose, then dispatch every task.
    pub async fn execute(&self, objective: &str) -> Result<DispatchOutcome, DispatchError> {
        if objective.trim().is_empty() {
            return Err(DomainError::EmptyObjective.into());
        }

        let mut state = OrchestrationState::new(RunId::generate(), objective);

        let plan = self.decompose(objective).await?;
        info!(run_id = %state.run_id, tasks = plan.len(), "plan created");

        state.set_plan(plan.clone());
        self.state_store.persist(&state).await;

        self.dispatch_all(objective, &plan, &mut state).await;

        Ok(DispatchOutcome { state })
    }

    /// Turn an objective into a plan with a single planner invocation.
    ///
    /// An unparseable response is a [`DispatchError::PlanningFailed`] —
    /// fatal to the run, never coerced into a default plan.
    pub async fn decompose(&self, objective: &str) -> Result<Plan, DispatchError> {
        let response = self
            .planner
            .run(&DispatchPromptTemplate::planning(objective))
            .await?;

        let plan = parse_plan(&response).ok_or(DispatchError::PlanningFailed)?;

        self.conversation_logger.log(ConversationEvent::new(
            "plan_created",
            serde_json::json!({
                "task_count": plan.len(),
                "task_ids": plan.task_ids().iter().map(|id| id.to_string()).collect::<Vec<_>>(),
            }),
        ));

        Ok(plan)
    }

    /// Execute every plan task in order, recording each outcome.
    ///
    /// Sequential by design: later tasks see the same fixed objective, and
    /// sequential execution keeps runs deterministic and debuggable.
    pub async fn dispatch_all(
        &self,
        objective: &str,
        plan: &Plan,
        state: &mut OrchestrationState,
    ) {
        let total = plan.len();

        for (index, task) in plan.tasks.iter().enumerate() {
            let outcome = match self.pool.worker_for(task.kind) {
                Some(worker) => {
                    let prompt = DispatchPromptTemplate::task_prompt(objective, task);
                    match worker.run(&prompt).await {
                        Ok(output) => TaskOutcome::Completed(output),
                        Err(e) => {
                            warn!(task = %task.id, kind = %task.kind, error = %e, "task failed");
                            TaskOutcome::Failed(e.to_string())
                        }
                    }
                }
                None => {
                    warn!(task = %task.id, kind = %task.kind, "no worker registered for kind");
                    TaskOutcome::Failed(format!("no worker registered for kind '{}'", task.kind))
                }
            };

            info!(
                task = %task.id,
                index = index + 1,
                total,
                success = outcome.is_success(),
                "task dispatched"
            );
            self.conversation_logger.log(ConversationEvent::new(
                "task_result",
                serde_json::json!({
                    "task_id": task.id.to_string(),
                    "kind": task.kind.to_string(),
                    "success": outcome.is_success(),
                }),
            ));

            state.record(task.id.clone(), outcome);
            self.state_store.persist(state).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conversation_logger::NoConversationLogger;
    use crate::ports::llm_gateway::{LlmGateway, LlmSession};
    use crate::ports::state_store::NoStateStore;
    use async_trait::async_trait;
    use conductor_domain::{Model, TaskId, WorkerKind};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Gateway whose sessions pop scripted responses in order.
    struct ScriptedGateway {
        responses: Mutex<VecDeque<Result<String, String>>>,
    }

    impl ScriptedGateway {
        fn new(responses: Vec<Result<&str, &str>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(
                    responses
                        .into_iter()
                        .map(|r| r.map(String::from).map_err(String::from))
                        .collect(),
                ),
            })
        }

        fn ok(response: &str) -> Arc<Self> {
            Self::new(vec![Ok(response)])
        }

        fn failing() -> Arc<Self> {
            Self::new(vec![])
        }
    }

    struct ScriptedSession {
        model: Model,
        gateway: Arc<ScriptedGateway>,
    }

    #[async_trait]
    impl LlmSession for ScriptedSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, _content: &str) -> Result<String, GatewayError> {
            match self.gateway.responses.lock().unwrap().pop_front() {
                Some(Ok(text)) => Ok(text),
                Some(Err(msg)) => Err(GatewayError::RequestFailed(msg)),
                None => Err(GatewayError::RequestFailed("no scripted response".to_string())),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        async fn create_session(
            &self,
            model: &Model,
            _system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            // Session shares the gateway's scripted queue
            Ok(Box::new(ScriptedSession {
                model: model.clone(),
                gateway: Arc::new(ScriptedGateway {
                    responses: Mutex::new(self.responses.lock().unwrap().drain(..).collect()),
                }),
            }))
        }
    }

    /// State store that counts snapshots handed to it.
    struct RecordingStateStore {
        snapshots: Mutex<Vec<usize>>,
    }

    impl RecordingStateStore {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                snapshots: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl StateStore for RecordingStateStore {
        async fn persist(&self, state: &OrchestrationState) {
            self.snapshots.lock().unwrap().push(state.results.len());
        }
    }

    fn worker(gateway: Arc<ScriptedGateway>, role: &str) -> Arc<Worker> {
        Arc::new(Worker::new(gateway, role, Model::default(), "instructions"))
    }

    fn plan_response(tasks: &[(&str, &str, &str)]) -> String {
        let tasks = tasks
            .iter()
            .map(|(id, kind, instruction)| {
                format!(
                    r#"{{"id": "{id}", "kind": "{kind}", "instruction": "{instruction}"}}"#
                )
            })
            .collect::<Vec<_>>()
            .join(",\n    ");
        format!("```plan\n{{\n  \"tasks\": [\n    {tasks}\n  ]\n}}\n```")
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_research_and_code_objective() {
        let planner = worker(
            ScriptedGateway::ok(&plan_response(&[
                ("1", "researcher", "Research X"),
                ("2", "coder", "Write sample code for X"),
            ])),
            "planner",
        );
        let pool = Arc::new(
            WorkerPool::new()
                .with_kind(WorkerKind::Researcher, worker(ScriptedGateway::ok("research notes"), "researcher"))
                .with_kind(WorkerKind::Coder, worker(ScriptedGateway::ok("sample code"), "coder")),
        );

        let use_case = DispatchUseCase::new(
            planner,
            pool,
            Arc::new(NoStateStore),
            Arc::new(NoConversationLogger),
        );

        let outcome = use_case.execute("Research X and write sample code").await.unwrap();

        // Exactly the plan's id set, one entry per task
        assert_eq!(outcome.results().len(), 2);
        assert_eq!(
            outcome.results().get(&TaskId::new("1")).unwrap(),
            &TaskOutcome::Completed("research notes".to_string())
        );
        assert_eq!(
            outcome.results().get(&TaskId::new("2")).unwrap(),
            &TaskOutcome::Completed("sample code".to_string())
        );
    }

    #[tokio::test]
    async fn test_one_failing_task_does_not_abort_siblings() {
        let planner = worker(
            ScriptedGateway::ok(&plan_response(&[
                ("1", "researcher", "first"),
                ("2", "coder", "second"),
                ("3", "writer", "third"),
            ])),
            "planner",
        );
        let pool = Arc::new(
            WorkerPool::new()
                .with_kind(WorkerKind::Researcher, worker(ScriptedGateway::ok("found it"), "researcher"))
                .with_kind(WorkerKind::Coder, worker(ScriptedGateway::failing(), "coder"))
                .with_kind(WorkerKind::Writer, worker(ScriptedGateway::ok("wrote it"), "writer")),
        );

        let use_case = DispatchUseCase::new(
            planner,
            pool,
            Arc::new(NoStateStore),
            Arc::new(NoConversationLogger),
        );

        let outcome = use_case.execute("three things").await.unwrap();

        assert_eq!(outcome.results().len(), 3);
        assert!(outcome.results().get(&TaskId::new("1")).unwrap().is_success());
        assert!(!outcome.results().get(&TaskId::new("2")).unwrap().is_success());
        assert!(outcome.results().get(&TaskId::new("3")).unwrap().is_success());

        // Every recorded id originated from the plan
        let plan = outcome.state.plan.as_ref().unwrap();
        assert!(outcome.results().keys().all(|id| plan.contains(id)));
    }

    #[tokio::test]
    async fn test_unparseable_plan_is_fatal() {
        let planner = worker(
            ScriptedGateway::ok("I'd be happy to help you break this down!"),
            "planner",
        );
        let use_case = DispatchUseCase::new(
            planner,
            Arc::new(WorkerPool::new()),
            Arc::new(NoStateStore),
            Arc::new(NoConversationLogger),
        );

        let err = use_case.execute("some objective").await.unwrap_err();
        assert!(matches!(err, DispatchError::PlanningFailed));
    }

    #[tokio::test]
    async fn test_planner_gateway_error_is_fatal() {
        let planner = worker(ScriptedGateway::failing(), "planner");
        let use_case = DispatchUseCase::new(
            planner,
            Arc::new(WorkerPool::new()),
            Arc::new(NoStateStore),
            Arc::new(NoConversationLogger),
        );

        let err = use_case.execute("some objective").await.unwrap_err();
        assert!(matches!(err, DispatchError::Gateway(_)));
    }

    #[tokio::test]
    async fn test_empty_objective_rejected() {
        let planner = worker(ScriptedGateway::failing(), "planner");
        let use_case = DispatchUseCase::new(
            planner,
            Arc::new(WorkerPool::new()),
            Arc::new(NoStateStore),
            Arc::new(NoConversationLogger),
        );

        let err = use_case.execute("   ").await.unwrap_err();
        assert!(matches!(err, DispatchError::Domain(DomainError::EmptyObjective)));
    }

    #[tokio::test]
    async fn test_state_persisted_after_plan_and_each_task() {
        let planner = worker(
            ScriptedGateway::ok(&plan_response(&[
                ("1", "researcher", "first"),
                ("2", "coder", "second"),
            ])),
            "planner",
        );
        let pool = Arc::new(
            WorkerPool::new()
                .with_kind(WorkerKind::Researcher, worker(ScriptedGateway::ok("a"), "researcher"))
                .with_kind(WorkerKind::Coder, worker(ScriptedGateway::ok("b"), "coder")),
        );
        let store = RecordingStateStore::new();

        let use_case = DispatchUseCase::new(
            planner,
            pool,
            store.clone(),
            Arc::new(NoConversationLogger),
        );

        use_case.execute("two things").await.unwrap();

        // One snapshot after the plan (0 results), then one per task
        assert_eq!(*store.snapshots.lock().unwrap(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_unregistered_kind_records_failure() {
        let planner = worker(
            ScriptedGateway::ok(&plan_response(&[("1", "writer", "write it")])),
            "planner",
        );
        // Pool has no writer
        let use_case = DispatchUseCase::new(
            planner,
            Arc::new(WorkerPool::new()),
            Arc::new(NoStateStore),
            Arc::new(NoConversationLogger),
        );

        let outcome = use_case.execute("write something").await.unwrap();
        let result = outcome.results().get(&TaskId::new("1")).unwrap();
        assert!(!result.is_success());
        assert!(result.text().contains("no worker registered"));
    }
}
