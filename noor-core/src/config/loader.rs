//! Configuration file loading

use super::error::ConfigError;
use super::AppConfig;
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    endpoint: Option<String>,
    api_path: Option<String>,
    model: Option<String>,
    temperature: Option<f64>,
    system_prompt: Option<String>,
}

impl RawConfig {
    fn into_config(self) -> AppConfig {
        let defaults = AppConfig::default();
        AppConfig {
            endpoint: self.endpoint.unwrap_or(defaults.endpoint),
            api_path: self.api_path.unwrap_or(defaults.api_path),
            model: self.model.unwrap_or(defaults.model),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            system_prompt: self.system_prompt.unwrap_or(defaults.system_prompt),
        }
    }
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load configuration from a file path. Only an explicitly requested path
/// may fail with `NotFound`; the default path falls back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)
            } else {
                debug!("No configuration file found; using built-in defaults");
                Ok(AppConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let raw: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(raw.into_config())
}
