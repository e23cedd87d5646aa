//! Suggest command implementation.

use crate::cli::SuggestArgs;
use crate::config::{Config, ProviderKind};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use namecraft_extractor::{NameSuggester, SuggestionRequest, SuggestionResult};
use namecraft_llm::{GeminiProvider, MockProvider};
use tracing::info;

/// Response served by the mock provider when none is configured.
const SAMPLE_RESPONSE: &str = "Here are some catchy, SEO friendly names:

**Short Names**:
* Lumo
* Brio

**Descriptive Names**:
* Lumo Everyday Essentials
* Brio Signature Collection

**Remember:** Check that the names are not already trademarked.";

/// Execute the suggest command.
pub async fn execute_suggest(
    args: SuggestArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let result = run_suggestion(args, config).await?;
    println!("{}", formatter.format_suggestion(&result)?);
    Ok(())
}

/// Build the configured provider and run one suggestion.
async fn run_suggestion(args: SuggestArgs, config: &Config) -> Result<SuggestionResult> {
    let mut extractor_config = config.extractor.clone();
    if let Some(policy) = args.policy {
        extractor_config.terminator_policy = policy.into();
    }

    let kind = args.provider.map(Into::into).unwrap_or(config.provider.kind);
    let model = args.model.unwrap_or_else(|| config.provider.model.clone());

    let request = SuggestionRequest {
        title: args.title,
        count: args.count,
        keywords: args.keywords,
    };

    info!("Using {:?} provider with model '{}'", kind, model);

    let result = match kind {
        ProviderKind::Gemini => {
            let api_key = args
                .api_key
                .filter(|k| !k.trim().is_empty())
                .or_else(|| config.api_key())
                .ok_or_else(|| {
                    CliError::Config(format!(
                        "No Gemini API key found. Set {} or provider.api_key",
                        config.provider.api_key_env
                    ))
                })?;

            let mut provider = GeminiProvider::new(api_key)
                .with_model(model)
                .with_max_retries(config.provider.max_retries)
                .with_timeout(config.provider.request_timeout());
            if let Some(endpoint) = &config.provider.endpoint {
                provider = provider.with_endpoint(endpoint.clone());
            }

            NameSuggester::new(provider, extractor_config)?
                .suggest(request)
                .await?
        }
        ProviderKind::Mock => {
            let response = config
                .provider
                .mock_response
                .clone()
                .unwrap_or_else(|| SAMPLE_RESPONSE.to_string());
            let provider = MockProvider::new(response).with_model_name(model);

            NameSuggester::new(provider, extractor_config)?
                .suggest(request)
                .await?
        }
    };

    Ok(result)
}
