//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use namecraft_extractor::ExtractorConfig;
use namecraft_llm::gemini::{API_KEY_ENV, DEFAULT_MAX_RETRIES, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use namecraft_llm::GeminiProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// LLM provider settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// List extraction and suggestion limits
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Default log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// LLM provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Provider to use
    #[serde(default = "default_provider")]
    pub kind: ProviderKind,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Alternative API endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// API key stored in the file (prefer `api_key_env`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request attempts before giving up (at least 1)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Timeout for a single HTTP request (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Response returned by the mock provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock_response: Option<String>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown text
    Text,
    /// JSON format
    Json,
}

/// LLM provider kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini API
    Gemini,
    /// Canned offline response
    Mock,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".namecraft").join("config.toml"))
    }

    /// Load configuration from a file, falling back to defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate().map_err(CliError::Config)?;
        if self.provider.model.trim().is_empty() {
            return Err(CliError::Config("provider.model cannot be empty".into()));
        }
        if self.provider.max_retries == 0 {
            return Err(CliError::Config("provider.max_retries must be at least 1".into()));
        }
        if self.provider.timeout_secs == 0 {
            return Err(CliError::Config("provider.timeout_secs must be greater than 0".into()));
        }

        // The suggester must not give up while the provider is still retrying
        let budget = GeminiProvider::retry_budget(self.provider.max_retries, self.provider.request_timeout());
        if budget > self.extractor.generation_timeout() {
            return Err(CliError::Config(format!(
                "extractor.generation_timeout_secs ({}) is shorter than the provider retry budget ({}s); \
                 raise it or lower provider.max_retries/provider.timeout_secs",
                self.extractor.generation_timeout_secs,
                budget.as_secs()
            )));
        }
        Ok(())
    }

    /// API key from the config file or the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        self.provider
            .api_key
            .clone()
            .or_else(|| std::env::var(&self.provider.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

impl ProviderSettings {
    /// Per-request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            log_level: default_log_level(),
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: default_provider(),
            model: default_model(),
            endpoint: None,
            api_key: None,
            api_key_env: default_api_key_env(),
            max_retries: default_max_retries(),
            timeout_secs: default_timeout_secs(),
            mock_response: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_provider() -> ProviderKind {
    ProviderKind::Gemini
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    API_KEY_ENV.to_string()
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
