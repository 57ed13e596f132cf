//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application-layer
//! types (`ModelProfiles`, `AgentConfig`, `RefineParams`) by the helpers
//! below.

use conductor_application::config::{AgentConfig, ModelProfiles, RefineParams};
use conductor_domain::Model;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gateway endpoint settings
    pub gateway: FileGatewayConfig,
    /// Model selection: default + per-module profiles
    pub models: FileModelsConfig,
    /// Per-role instruction overrides
    pub workers: FileWorkersConfig,
    /// Refinement loop settings
    pub refine: FileRefineConfig,
    /// State persistence settings
    pub state: FileStateConfig,
    /// Conversation logging settings
    pub logging: FileLoggingConfig,
}

/// `[gateway]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Base URL of an OpenAI-compatible endpoint
    pub base_url: String,
    /// Environment variable holding the bearer token (never the token itself)
    pub api_key_env: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434/v1".to_string(),
            api_key_env: "CONDUCTOR_API_KEY".to_string(),
            timeout_secs: 120,
        }
    }
}

impl FileGatewayConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok().filter(|k| !k.is_empty())
    }
}

/// `[models]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model used when no profile matches
    pub default: String,
    /// Per-module overrides, e.g. `planner = "gpt-5.2"`
    pub profiles: HashMap<String, String>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            default: Model::default().to_string(),
            profiles: HashMap::new(),
        }
    }
}

impl FileModelsConfig {
    /// Convert into the application-layer profile mapping.
    pub fn to_profiles(&self) -> ModelProfiles {
        let default: Model = self.default.parse().unwrap_or_default();
        let mut profiles = ModelProfiles::new(default);
        for (module, model) in &self.profiles {
            profiles = profiles.with_profile(module, model.parse().unwrap_or_default());
        }
        profiles
    }
}

/// `[workers]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkersConfig {
    /// Per-role instruction overrides, e.g. `coder = "You write Rust only."`
    pub instructions: HashMap<String, String>,
}

impl FileWorkersConfig {
    /// Build the [`AgentConfig`] for a role: module name always set, the
    /// instruction override only when the file provides one.
    pub fn agent_config(&self, role: &str) -> AgentConfig {
        let mut config = AgentConfig::new().with_module_name(role);
        if let Some(instructions) = self.instructions.get(role) {
            config = config.with_instructions(instructions.clone());
        }
        config
    }
}

/// `[refine]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRefineConfig {
    /// Maximum regeneration attempts after the initial generation
    pub max_turns: usize,
    /// Rubric gate: minimum content length in bytes
    pub min_length: usize,
    /// Rubric gate: phrases the content must contain
    pub required_phrases: Vec<String>,
}

impl Default for FileRefineConfig {
    fn default() -> Self {
        Self {
            max_turns: 3,
            min_length: 80,
            required_phrases: Vec::new(),
        }
    }
}

impl FileRefineConfig {
    pub fn to_params(&self) -> RefineParams {
        RefineParams::default().with_max_turns(self.max_turns)
    }
}

/// `[state]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStateConfig {
    /// Whether dispatch runs persist their state
    pub enabled: bool,
    /// Directory for `<run_id>.json` snapshots
    pub dir: String,
}

impl Default for FileStateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: ".conductor/state".to_string(),
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL conversation log path; absent disables the transcript
    pub conversation_log: Option<String>,
}
