//! Name suggestion pipeline: prompt, generate, extract

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::extractor::ListExtractor;
use crate::prompt::PromptBuilder;
use crate::types::{Section, SuggestionMetadata, SuggestionRequest, SuggestionResult};
use namecraft_domain::traits::LlmProvider;
use namecraft_domain::ProductTitle;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Asks an LLM for product names and keeps only the listed names
pub struct NameSuggester<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    extractor: ListExtractor,
    config: ExtractorConfig,
}

impl<L> NameSuggester<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new NameSuggester
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::Config` if the configuration is invalid
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            llm_provider: Arc::new(llm_provider),
            extractor: ListExtractor::with_policy(config.terminator_policy),
            config,
        })
    }

    /// The list extractor applied to responses
    pub fn extractor(&self) -> &ListExtractor {
        &self.extractor
    }

    /// Suggest names for a product
    ///
    /// A response without list content is not an error: the result is
    /// simply empty.
    pub async fn suggest(
        &self,
        request: SuggestionRequest,
    ) -> Result<SuggestionResult, ExtractorError> {
        let start_time = SystemTime::now();

        let title = ProductTitle::new(request.title).map_err(ExtractorError::InvalidTitle)?;
        if title.char_len() > self.config.max_title_length {
            return Err(ExtractorError::TitleTooLong(
                title.char_len(),
                self.config.max_title_length,
            ));
        }

        info!("Suggesting names for '{}'", title);

        let mut builder = PromptBuilder::new(title.clone()).with_keywords(request.keywords);
        if let Some(count) = request.count {
            builder = builder.with_count(count);
        }
        let prompt = builder.build();

        debug!("Prompt length: {} chars", prompt.len());

        let response = timeout(
            self.config.generation_timeout(),
            self.call_llm(&prompt),
        )
        .await
        .map_err(|_| ExtractorError::Timeout)??;

        if response.len() > self.config.max_response_length {
            return Err(ExtractorError::ResponseTooLong(
                response.len(),
                self.config.max_response_length,
            ));
        }

        debug!("LLM response length: {} bytes", response.len());

        let markdown = self.extractor.extract(&response);
        let sections = self.extractor.sections(&response);
        let names = names_in(&sections);

        if names.is_empty() {
            warn!("Response for '{}' contained no list items", title);
        } else {
            info!("Extracted {} names for '{}'", names.len(), title);
        }

        let processing_time_ms = start_time
            .elapsed()
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Ok(SuggestionResult {
            markdown,
            names,
            sections,
            metadata: SuggestionMetadata {
                product_title: title.to_string(),
                timestamp: current_timestamp(),
                model_name: self.llm_provider.model_name().to_string(),
                response_length: response.len(),
                processing_time_ms,
            },
        })
    }

    /// Call the LLM provider
    async fn call_llm(&self, prompt: &str) -> Result<String, ExtractorError> {
        let llm = Arc::clone(&self.llm_provider);
        let prompt = prompt.to_string();

        // Call in a blocking context since LlmProvider is not async
        tokio::task::spawn_blocking(move || {
            llm.generate(&prompt)
                .map_err(|e| ExtractorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))?
    }
}

/// Item text with surrounding bold markers removed
fn clean_name(item: &str) -> String {
    let item = item.trim();
    item.strip_prefix("**")
        .and_then(|s| s.strip_suffix("**"))
        .unwrap_or(item)
        .trim()
        .to_string()
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Names listed in a set of sections, in order
pub fn names_in(sections: &[Section]) -> Vec<String> {
    sections
        .iter()
        .flat_map(|s| s.items.iter())
        .map(|item| clean_name(item))
        .filter(|name| !name.is_empty())
        .collect()
}
