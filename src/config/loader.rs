//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. Explicit `--config <path>` file
//! 4. `.pageload.toml` in the working directory
//! 5. `~/.config/pageload/config.toml` (global defaults)
//! 6. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_FIRST_NAME, ENV_FIRST_NAME, ENV_SERVER_URL,
    ENV_TIMEOUT_SECS,
};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub login: LoginConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the backend service. Not validated.
    pub url: Option<String>,
    /// Request timeout in seconds. `None` waits on the transport indefinitely.
    pub timeout_secs: Option<u64>,
}

/// Login call settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    /// Name sent in the login payload. `None` falls back to `"Alice"`.
    pub first_name: Option<String>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` must exist when given; the global and working-directory
    /// files are optional.
    pub fn load(explicit: Option<&Path>, cwd: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.merge(Self::load_file(&global_path)?);
            }
        }

        if let Some(dir) = cwd {
            let local_path = dir.join(CONFIG_FILENAME);
            if local_path.exists() {
                config.merge(Self::load_file(&local_path)?);
            }
        }

        if let Some(path) = explicit {
            config.merge(Self::load_file(path)?);
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// The base URL handed to the loader. Empty when unset.
    pub fn base_url(&self) -> String {
        self.server.url.clone().unwrap_or_default()
    }

    /// The first name for the login payload.
    pub fn first_name(&self) -> &str {
        self.login.first_name.as_deref().unwrap_or(DEFAULT_FIRST_NAME)
    }

    /// The configured request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.server.timeout_secs.map(Duration::from_secs)
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one. Only values set in `other` take
    /// effect.
    fn merge(&mut self, other: Config) {
        if other.server.url.is_some() {
            self.server.url = other.server.url;
        }
        if other.server.timeout_secs.is_some() {
            self.server.timeout_secs = other.server.timeout_secs;
        }
        if other.login.first_name.is_some() {
            self.login.first_name = other.login.first_name;
        }
    }

    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(ENV_SERVER_URL) {
            self.server.url = Some(val);
        }

        if let Some(val) = env.non_empty(ENV_TIMEOUT_SECS) {
            match val.trim().parse::<u64>() {
                Ok(secs) => self.server.timeout_secs = Some(secs),
                Err(_) => warn!("ignoring invalid {ENV_TIMEOUT_SECS} value: {val}"),
            }
        }

        if let Some(val) = env.non_empty(ENV_FIRST_NAME) {
            self.login.first_name = Some(val);
        }
    }
}
