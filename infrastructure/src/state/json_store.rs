//! JSON file state store.
//!
//! Persists each [`OrchestrationState`] as `<run_id>.json` under a
//! configured directory, overwriting the previous snapshot on every
//! persist. Fire-and-forget per the port contract: failures are logged and
//! swallowed — a run never fails because its state could not be written.

use async_trait::async_trait;
use conductor_application::ports::state_store::StateStore;
use conductor_domain::{OrchestrationState, RunId};
use std::path::{Path, PathBuf};
use tracing::warn;

/// State store writing one JSON document per run.
pub struct JsonStateStore {
    dir: PathBuf,
}

impl JsonStateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where a run's snapshot lives.
    pub fn path_for(&self, run_id: &RunId) -> PathBuf {
        self.dir.join(format!("{}.json", run_id))
    }

    /// Load a previously persisted snapshot, if one exists and parses.
    pub fn load(path: &Path) -> Option<OrchestrationState> {
        let raw = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&raw).ok()
    }
}

#[async_trait]
impl StateStore for JsonStateStore {
    async fn persist(&self, state: &OrchestrationState) {
        if let Err(e) = tokio::fs::create_dir_all(&self.dir).await {
            warn!(dir = %self.dir.display(), error = %e, "could not create state directory");
            return;
        }

        let json = match serde_json::to_string_pretty(state) {
            Ok(json) => json,
            Err(e) => {
                warn!(run_id = %state.run_id, error = %e, "could not serialize state");
                return;
            }
        };

        let path = self.path_for(&state.run_id);
        if let Err(e) = tokio::fs::write(&path, json).await {
            warn!(path = %path.display(), error = %e, "could not write state snapshot");
        }
    }
}
