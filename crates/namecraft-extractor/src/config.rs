//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to do when a terminator line (`**Remember:**`, `**Note:**`, ...) is seen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminatorPolicy {
    /// Drop the terminator line and keep scanning later lines
    #[default]
    Skip,
    /// Stop at the first terminator line and return what was kept so far
    Stop,
}

impl TerminatorPolicy {
    /// Get the policy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminatorPolicy::Skip => "skip",
            TerminatorPolicy::Stop => "stop",
        }
    }
}

impl std::str::FromStr for TerminatorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(TerminatorPolicy::Skip),
            "stop" => Ok(TerminatorPolicy::Stop),
            _ => Err(format!("Invalid terminator policy: {}", s)),
        }
    }
}

/// Configuration for the Extractor and name suggester
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Handling of terminator lines
    pub terminator_policy: TerminatorPolicy,

    /// Maximum product title length (characters)
    pub max_title_length: usize,

    /// Maximum accepted LLM response size (bytes)
    pub max_response_length: usize,

    /// Maximum time for a single generation call (seconds)
    pub generation_timeout_secs: u64,
}

impl ExtractorConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_title_length == 0 {
            return Err("max_title_length must be greater than 0".to_string());
        }
        if self.max_response_length == 0 {
            return Err("max_response_length must be greater than 0".to_string());
        }
        if self.generation_timeout_secs == 0 {
            return Err("generation_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration: literal terminator handling, balanced limits
    ///
    /// The timeout covers a provider retrying three 30 second requests.
    fn default() -> Self {
        Self {
            terminator_policy: TerminatorPolicy::Skip,
            max_title_length: 255,
            max_response_length: 64 * 1024,
            generation_timeout_secs: 120,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: stop at the first terminator, tighter limits
    pub fn strict() -> Self {
        Self {
            terminator_policy: TerminatorPolicy::Stop,
            max_title_length: 120,
            max_response_length: 16 * 1024,
            generation_timeout_secs: 30,
        }
    }

    /// Lenient preset: skip terminators, generous limits for slow models
    pub fn lenient() -> Self {
        Self {
            terminator_policy: TerminatorPolicy::Skip,
            max_title_length: 1_000,
            max_response_length: 512 * 1024,
            generation_timeout_secs: 180,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
