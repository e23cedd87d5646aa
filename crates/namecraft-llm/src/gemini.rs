//! Gemini Provider Implementation
//!
//! Provides integration with Google's Gemini `generateContent` REST API.
//!
//! # Features
//!
//! - Async HTTP communication with the Gemini API
//! - Configurable endpoint, model and API key
//! - Retry logic with exponential backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use namecraft_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::new("my-api-key").with_model("gemini-1.5-flash");
//!
//! // The generate method is async; the LlmProvider trait offers a blocking wrapper
//! ```

use crate::LlmError;
use namecraft_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Environment variable consulted for the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default timeout for LLM requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of request attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Gemini API provider
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    timeout: Duration,
    max_retries: u32,
}

/// Request body for the generateContent API
#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest {
    contents: Vec<Content>,
}

/// Response from the generateContent API
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

impl GenerateContentRequest {
    pub(crate) fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Concatenate the text parts of the first candidate
    pub(crate) fn into_text(self) -> Result<String, LlmError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("No candidates in response".to_string()))?;

        let content = candidate
            .content
            .ok_or_else(|| LlmError::InvalidResponse("Candidate has no content".to_string()))?;

        Ok(content.parts.into_iter().map(|p| p.text).collect())
    }
}

impl GeminiProvider {
    /// Create a new Gemini provider with the default endpoint and model
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use namecraft_llm::GeminiProvider;
    ///
    /// let provider = GeminiProvider::new("my-api-key");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        let timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            client: build_client(timeout),
            timeout,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Create a provider using the key in `GEMINI_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Authentication` if the variable is unset or blank
    pub fn from_env() -> Result<Self, LlmError> {
        let key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                LlmError::Authentication(format!("{} is not set", API_KEY_ENV))
            })?;
        Ok(Self::new(key))
    }

    /// Use a different model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Use a different API endpoint (e.g. a proxy)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the maximum number of request attempts
    ///
    /// A value of 0 is treated as 1: at least one request is always sent.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self.timeout = timeout;
        self
    }

    /// Longest time `generate` can take before giving up
    pub fn worst_case_duration(&self) -> Duration {
        Self::retry_budget(self.max_retries, self.timeout)
    }

    /// Worst-case duration of `max_retries` attempts of `timeout` each,
    /// including the backoff sleeps between them
    pub fn retry_budget(max_retries: u32, timeout: Duration) -> Duration {
        let attempts = max_retries.max(1);
        let backoff = (1..attempts).map(backoff_secs).fold(0u64, u64::saturating_add);
        timeout
            .saturating_mul(attempts)
            .saturating_add(Duration::from_secs(backoff))
    }

    /// Model name in use
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Generate text using the Gemini API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The API key is rejected
    /// - Model is not available
    /// - Network communication fails
    /// - Response format is invalid
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::Authentication("API key is empty".to_string()));
        }

        let url = self.url();
        let request_body = GenerateContentRequest::from_prompt(prompt);

        // Retry logic with exponential backoff
        let max_attempts = self.max_retries.max(1);
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < max_attempts {
            debug!("Gemini request attempt {} to model '{}'", attempts + 1, self.model);

            match self.client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return match response.json::<GenerateContentResponse>().await {
                            Ok(body) => body.into_text(),
                            Err(e) => Err(LlmError::InvalidResponse(
                                format!("Failed to parse response: {}", e)
                            )),
                        };
                    }

                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());

                    match status {
                        reqwest::StatusCode::NOT_FOUND => {
                            return Err(LlmError::ModelNotAvailable(self.model.clone()));
                        }
                        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                            return Err(LlmError::Authentication(error_text));
                        }
                        reqwest::StatusCode::BAD_REQUEST => {
                            if error_text.contains("API_KEY_INVALID") {
                                return Err(LlmError::Authentication(error_text));
                            }
                            return Err(LlmError::Communication(
                                format!("HTTP {}: {}", status, error_text)
                            ));
                        }
                        reqwest::StatusCode::TOO_MANY_REQUESTS => {
                            last_error = Some(LlmError::RateLimitExceeded);
                        }
                        _ => {
                            last_error = Some(LlmError::Communication(
                                format!("HTTP {}: {}", status, error_text)
                            ));
                        }
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(
                        format!("Request failed: {}", e)
                    ));
                }
            }

            attempts += 1;
            if attempts < max_attempts {
                let delay = Duration::from_secs(backoff_secs(attempts));
                warn!("Gemini request failed, retrying in {:?}", delay);
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            LlmError::Communication("Max retries exceeded".to_string())
        }))
    }
}

/// Exponential backoff after the given failed attempt: 1s, 2s, 4s, etc.
fn backoff_secs(attempt: u32) -> u64 {
    2u64.saturating_pow(attempt.saturating_sub(1))
}

fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for async function
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(async { self.generate(prompt).await })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
