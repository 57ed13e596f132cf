//! Worker lifecycle shared by every orchestrator.
//!
//! A [`Worker`] is one configured agent: a role label, a resolved model,
//! instruction text, and a lazily-created gateway session. Construction is
//! cheap and side-effect-free — many workers are built speculatively (a
//! fully-populated pool, a health-probed instance) and never run, so the
//! session is only created on the first [`Worker::run`] call and cached for
//! the instance's remaining lifetime.

use crate::config::{AgentConfig, ModelProfiles};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use conductor_domain::Model;
use conductor_domain::util::truncate_str;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Bytes of input echoed into the pre-invocation debug log.
const INPUT_PREVIEW_BYTES: usize = 100;

/// One configured agent with a lazily-initialized session.
pub struct Worker {
    gateway: Arc<dyn LlmGateway>,
    role: String,
    model: Model,
    instructions: String,
    session: OnceCell<Box<dyn LlmSession>>,
}

impl Worker {
    /// Build a worker with explicit role, model, and instructions.
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        role: impl Into<String>,
        model: Model,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            role: role.into(),
            model,
            instructions: instructions.into(),
            session: OnceCell::new(),
        }
    }

    /// Build a worker from an [`AgentConfig`], falling back to the given
    /// role default for each absent option.
    ///
    /// `module_name` selects both the model profile and the role label;
    /// `instructions` overrides the default system prompt.
    pub fn from_config(
        gateway: Arc<dyn LlmGateway>,
        profiles: &ModelProfiles,
        config: &AgentConfig,
        default_role: &str,
        default_instructions: &str,
    ) -> Self {
        let role = config
            .module_name
            .clone()
            .unwrap_or_else(|| default_role.to_string());
        let model = profiles.resolve(config.module_name.as_deref());
        let instructions = config
            .instructions
            .clone()
            .unwrap_or_else(|| default_instructions.to_string());

        Self::new(gateway, role, model, instructions)
    }

    /// The role label this worker logs under.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// The model this worker's session is (or will be) bound to.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Whether the underlying session has been created yet.
    pub fn is_initialized(&self) -> bool {
        self.session.initialized()
    }

    /// Run one invocation against this worker's agent.
    ///
    /// The first call creates the session from the configured model and
    /// instructions; later calls reuse it. Gateway errors propagate
    /// unchanged — the lifecycle adds no retry.
    pub async fn run(&self, input: &str) -> Result<String, GatewayError> {
        let session = self
            .session
            .get_or_try_init(|| async {
                debug!(role = %self.role, model = %self.model, "creating agent session");
                self.gateway.create_session(&self.model, &self.instructions).await
            })
            .await?;

        debug!(
            role = %self.role,
            input = %truncate_str(input, INPUT_PREVIEW_BYTES),
            "invoking agent"
        );

        let started = Instant::now();
        let output = session.send(input).await?;

        info!(
            role = %self.role,
            duration_ms = started.elapsed().as_millis() as u64,
            output_bytes = output.len(),
            "agent run complete"
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSession {
        model: Model,
        responses: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LlmSession for CountingSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, _content: &str) -> Result<String, GatewayError> {
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                return Err(GatewayError::Other("no more responses".to_string()));
            }
            Ok(responses.remove(0))
        }
    }

    struct CountingGateway {
        sessions_created: AtomicUsize,
        responses: Mutex<Vec<String>>,
    }

    impl CountingGateway {
        fn new(responses: Vec<&str>) -> Self {
            Self {
                sessions_created: AtomicUsize::new(0),
                responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for CountingGateway {
        async fn create_session(
            &self,
            model: &Model,
            _system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            self.sessions_created.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(CountingSession {
                model: model.clone(),
                responses: Mutex::new(self.responses.lock().unwrap().drain(..).collect()),
            }))
        }
    }

    #[tokio::test]
    async fn test_session_is_lazy_and_cached() {
        let gateway = Arc::new(CountingGateway::new(vec!["first", "second"]));
        let worker = Worker::new(
            gateway.clone(),
            "researcher",
            Model::default(),
            "You research.",
        );

        // Construction creates nothing
        assert!(!worker.is_initialized());
        assert_eq!(gateway.sessions_created.load(Ordering::SeqCst), 0);

        let out = worker.run("look this up").await.unwrap();
        assert_eq!(out, "first");
        assert!(worker.is_initialized());
        assert_eq!(gateway.sessions_created.load(Ordering::SeqCst), 1);

        // Second run reuses the cached session
        let out = worker.run("and this").await.unwrap();
        assert_eq!(out, "second");
        assert_eq!(gateway.sessions_created.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let gateway = Arc::new(CountingGateway::new(vec![]));
        let worker = Worker::new(gateway, "coder", Model::default(), "You code.");

        let err = worker.run("do something").await.unwrap_err();
        assert!(matches!(err, GatewayError::Other(_)));
    }

    #[test]
    fn test_from_config_applies_overrides_and_defaults() {
        let gateway = Arc::new(CountingGateway::new(vec![]));
        let profiles =
            ModelProfiles::new(Model::ClaudeSonnet45).with_profile("billing", Model::Gpt5Mini);

        // Overrides present: module name wins for role and profile
        let config = AgentConfig::new()
            .with_module_name("billing")
            .with_instructions("Custom instructions.");
        let worker = Worker::from_config(
            gateway.clone(),
            &profiles,
            &config,
            "general",
            "Default instructions.",
        );
        assert_eq!(worker.role(), "billing");
        assert_eq!(worker.model(), &Model::Gpt5Mini);
        assert_eq!(worker.instructions, "Custom instructions.");

        // Absent options: type-specific defaults apply
        let worker = Worker::from_config(
            gateway,
            &profiles,
            &AgentConfig::new(),
            "general",
            "Default instructions.",
        );
        assert_eq!(worker.role(), "general");
        assert_eq!(worker.model(), &Model::ClaudeSonnet45);
        assert_eq!(worker.instructions, "Default instructions.");
    }
}
