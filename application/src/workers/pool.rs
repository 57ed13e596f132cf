//! Static worker pool.
//!
//! A fixed mapping from worker kind and route category to worker instances,
//! built once at construction and shared read-only across runs. There is no
//! dynamic worker discovery.

use super::worker::Worker;
use conductor_domain::{RouteCategory, WorkerKind};
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only registry of specialized workers.
#[derive(Default)]
pub struct WorkerPool {
    by_kind: HashMap<WorkerKind, Arc<Worker>>,
    by_category: HashMap<RouteCategory, Arc<Worker>>,
}

impl WorkerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the worker for a task kind.
    pub fn with_kind(mut self, kind: WorkerKind, worker: Arc<Worker>) -> Self {
        self.by_kind.insert(kind, worker);
        self
    }

    /// Register the handler for a route category.
    pub fn with_category(mut self, category: RouteCategory, worker: Arc<Worker>) -> Self {
        self.by_category.insert(category, worker);
        self
    }

    /// Worker for a task kind, if one is registered.
    pub fn worker_for(&self, kind: WorkerKind) -> Option<&Arc<Worker>> {
        self.by_kind.get(&kind)
    }

    /// Handler for a route category.
    ///
    /// Categories with no registered handler fall back to the `General`
    /// handler — the one intentional default in the routing flow. Returns
    /// `None` only when not even a general handler exists.
    pub fn handler_for(&self, category: RouteCategory) -> Option<&Arc<Worker>> {
        self.by_category
            .get(&category)
            .or_else(|| self.by_category.get(&RouteCategory::General))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
    use async_trait::async_trait;
    use conductor_domain::Model;

    struct DeadGateway;

    #[async_trait]
    impl LlmGateway for DeadGateway {
        async fn create_session(
            &self,
            _model: &Model,
            _system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Err(GatewayError::ConnectionError("unused".to_string()))
        }
    }

    fn worker(role: &str) -> Arc<Worker> {
        Arc::new(Worker::new(
            Arc::new(DeadGateway),
            role,
            Model::default(),
            "instructions",
        ))
    }

    #[test]
    fn test_kind_lookup() {
        let pool = WorkerPool::new().with_kind(WorkerKind::Coder, worker("coder"));
        assert!(pool.worker_for(WorkerKind::Coder).is_some());
        assert!(pool.worker_for(WorkerKind::Researcher).is_none());
    }

    #[test]
    fn test_category_falls_back_to_general() {
        let pool = WorkerPool::new()
            .with_category(RouteCategory::Billing, worker("billing"))
            .with_category(RouteCategory::General, worker("general"));

        assert_eq!(
            pool.handler_for(RouteCategory::Billing).unwrap().role(),
            "billing"
        );
        // No technical handler registered: general takes it
        assert_eq!(
            pool.handler_for(RouteCategory::Technical).unwrap().role(),
            "general"
        );
    }

    #[test]
    fn test_no_general_handler_is_none() {
        let pool = WorkerPool::new().with_category(RouteCategory::Billing, worker("billing"));
        assert!(pool.handler_for(RouteCategory::Technical).is_none());
    }
}
