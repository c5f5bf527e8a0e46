//! Application configuration
//!
//! Defaults come from [`crate::constants`]; an optional TOML file overrides
//! them, and CLI flags override the file. The API credential itself never
//! lives in the file — it is read from the environment (see the gateway).

mod error;
mod loader;

pub use error::ConfigError;
pub use loader::ensure_env_loaded;

use crate::constants::{
    DEFAULT_GEMINI_API_PATH, DEFAULT_GEMINI_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    SYSTEM_INSTRUCTION,
};
use std::path::Path;

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Gemini API base endpoint
    pub endpoint: String,
    /// API path segment between endpoint and model name
    pub api_path: String,
    /// Model identifier used in the request URL
    pub model: String,
    /// Fixed sampling temperature sent with every request
    pub temperature: f64,
    /// Persona directive attached as the system instruction
    pub system_prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            api_path: DEFAULT_GEMINI_API_PATH.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            system_prompt: SYSTEM_INSTRUCTION.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration. `path` of `None` tries the default location and
    /// silently falls back to defaults when the file does not exist; an
    /// explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        loader::load_config(path)
    }
}
