//! LLM Gateway port
//!
//! Defines the interface for the model invocation boundary. The
//! coordination core never sees prompts leave the process; it hands text to
//! a session and receives text back. Adapters live in the infrastructure
//! layer.

use async_trait::async_trait;
use conductor_domain::Model;
use thiserror::Error;

/// Errors that can occur at the model invocation boundary.
///
/// These propagate through the core unchanged — retry policy, if any,
/// belongs to the adapter behind this port.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer obtains agent sessions.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session bound to a model and a system prompt
    async fn create_session(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message and get a response
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
