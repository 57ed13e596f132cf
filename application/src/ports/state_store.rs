//! Port for orchestration state persistence.
//!
//! [`OrchestrationState`] is the unit of persistence: the dispatch
//! orchestrator hands the whole state over after every mutation. The
//! contract is fire-and-forget — no acknowledged-write guarantee is assumed,
//! adapters log failures rather than returning them, and the core never
//! fails a run because a persist did. A crash between persists leaves a
//! partial results map on disk, which is an accepted observable state.

use async_trait::async_trait;
use conductor_domain::OrchestrationState;

/// Port for persisting orchestration state.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Persist a snapshot of the state. Infallible from the caller's
    /// perspective; adapters handle their own errors.
    async fn persist(&self, state: &OrchestrationState);
}

/// No-op implementation for tests and when persistence is disabled.
pub struct NoStateStore;

#[async_trait]
impl StateStore for NoStateStore {
    async fn persist(&self, _state: &OrchestrationState) {}
}
