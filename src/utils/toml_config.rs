//! TOML-based configuration for Nex.Ai
//!
//! Settings come from an optional `nex.toml`, then environment variables
//! (`HOST`, `PORT`, `CORS_ORIGINS`, `OPENAI_API_URL`) override them. The API key
//! itself is never stored in the file; `llm.api_key_env` names the variable
//! that holds it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure loaded from nex.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NexConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub llm: LlmConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of the human-readable format
    #[serde(default)]
    pub json_logs: bool,

    /// Allowed CORS origins; `*` allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            json_logs: false,
            cors_origins: default_cors_origins(),
        }
    }
}

impl ServerConfig {
    /// Whether any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

// ============= Upstream LLM Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Full chat completion endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Environment variable containing the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Prepended to every conversation before it is forwarded
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_system_prompt() -> String {
    "You are Nex.Ai, a helpful, friendly, and knowledgeable AI assistant. \
     Provide clear, concise, and accurate responses. Be conversational but professional."
        .to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key_env: default_api_key_env(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl LlmConfig {
    /// Resolve the API key from the environment; blank values count as unset
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

// ============= Configuration Loading =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for environment variable '{name}': {value}")]
    InvalidEnvVar { name: String, value: String },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Where the base settings came from, before environment overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at the given path
    Defaults,
}

impl NexConfig {
    /// Parse a configuration file, failing if it does not exist
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config: NexConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if present (defaults otherwise), apply environment
    /// overrides, then validate
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_with_source(path, |name| std::env::var(name).ok()).map(|(config, _)| config)
    }

    /// Same as [`NexConfig::load`] with an explicit environment, also
    /// reporting whether the file was read
    pub fn load_with_source<P, F>(path: P, lookup: F) -> Result<(Self, ConfigSource), ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();

        let (mut config, source) = if path.exists() {
            (Self::from_file(path)?, ConfigSource::File(path.to_path_buf()))
        } else {
            (Self::default(), ConfigSource::Defaults)
        };

        config.apply_env_overrides(lookup)?;
        config.validate()?;
        Ok((config, source))
    }

    /// Apply `HOST`, `PORT`, `CORS_ORIGINS` and `OPENAI_API_URL` from `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: port.clone(),
            })?;
        }

        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.server.cors_origins = parse_origins(&origins);
        }

        if let Some(url) = lookup("OPENAI_API_URL") {
            self.llm.api_url = url;
        }

        Ok(())
    }

    /// Check values the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.api_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "llm.api_url must not be empty".to_string(),
            ));
        }

        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "llm.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::ValidationError(format!(
                "llm.temperature must be between 0 and 2, got {}",
                self.llm.temperature
            )));
        }

        Ok(())
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Split a comma separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
