//! Per-agent configuration and model profile resolution.
//!
//! [`AgentConfig`] carries the two recognized per-instance options:
//! `instructions` overrides the role's default system prompt, and
//! `module_name` selects both the model profile and the role label used in
//! logs. Absent values fall back to type-specific defaults supplied by the
//! caller constructing the worker.

use conductor_domain::Model;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration options for one agent instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Overrides the default system prompt for this agent's role
    pub instructions: Option<String>,
    /// Selects the model profile and the logger role label
    pub module_name: Option<String>,
}

impl AgentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = Some(module_name.into());
        self
    }
}

/// Mapping from module name to model, with a default.
///
/// Read-only after construction; shared across every worker built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelProfiles {
    /// Model used when no profile matches
    pub default: Model,
    /// Per-module overrides
    pub profiles: HashMap<String, Model>,
}

impl Default for ModelProfiles {
    fn default() -> Self {
        Self {
            default: Model::default(),
            profiles: HashMap::new(),
        }
    }
}

impl ModelProfiles {
    pub fn new(default: Model) -> Self {
        Self {
            default,
            profiles: HashMap::new(),
        }
    }

    pub fn with_profile(mut self, module_name: impl Into<String>, model: Model) -> Self {
        self.profiles.insert(module_name.into(), model);
        self
    }

    /// Resolve the model for a module name; `None` or an unknown name gets
    /// the default.
    pub fn resolve(&self, module_name: Option<&str>) -> Model {
        module_name
            .and_then(|name| self.profiles.get(name))
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_config_builder() {
        let config = AgentConfig::new()
            .with_instructions("You answer in French.")
            .with_module_name("billing");

        assert_eq!(config.instructions.as_deref(), Some("You answer in French."));
        assert_eq!(config.module_name.as_deref(), Some("billing"));
    }

    #[test]
    fn test_profile_resolution() {
        let profiles = ModelProfiles::new(Model::ClaudeSonnet45)
            .with_profile("planner", Model::Gpt52)
            .with_profile("classifier", Model::ClaudeHaiku45);

        assert_eq!(profiles.resolve(Some("planner")), Model::Gpt52);
        assert_eq!(profiles.resolve(Some("classifier")), Model::ClaudeHaiku45);
        // Unknown and absent names fall back to the default
        assert_eq!(profiles.resolve(Some("nonexistent")), Model::ClaudeSonnet45);
        assert_eq!(profiles.resolve(None), Model::ClaudeSonnet45);
    }
}
