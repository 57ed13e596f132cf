//! Infrastructure layer for agent-conductor
//!
//! External adapters: the HTTP model gateway, the JSON state store, the
//! JSONL conversation logger, configuration loading, and the shipped
//! quality gate.

pub mod checks;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod state;

// Re-export commonly used types
pub use checks::RubricGate;
pub use config::{ConfigLoader, FileConfig};
pub use gateway::{HealthStatus, HttpLlmGateway};
pub use logging::JsonlConversationLogger;
pub use state::JsonStateStore;
