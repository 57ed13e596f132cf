//! Application layer for agent-conductor
//!
//! This crate contains the orchestration use cases, the worker lifecycle,
//! port definitions, and application configuration. It depends only on the
//! domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;
pub mod workers;

// Re-export commonly used types
pub use config::{AgentConfig, ModelProfiles, RefineParams};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    quality_gate::{QualityGate, QualityGateError},
    state_store::{NoStateStore, StateStore},
};
pub use use_cases::{
    DispatchError, DispatchOutcome, DispatchUseCase, ROUTING_FAILED_RESPONSE, RefineError,
    RefineOutcome, RefineUseCase, RouteError, RouteOutcome, RouteUseCase,
};
pub use workers::{Worker, WorkerPool};
