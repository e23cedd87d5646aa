//! Integration tests for the name suggestion pipeline

#[cfg(test)]
mod tests {
    use crate::{
        ExtractorConfig, ExtractorError, NameSuggester, SuggestionRequest, TerminatorPolicy,
    };
    use namecraft_domain::traits::LlmProvider;
    use namecraft_llm::{LlmError, MockProvider};
    use std::time::Duration;

    const GEMINI_STYLE_RESPONSE: &str = "\
Here are some SEO friendly names for your ceramic mug:

**Playful Names**:
* Mugsy Morning
* Sip Happens

**Elegant Names**:
* **Porcelain Dawn**
* Glaze & Grace

**Tip:** Test the names with your audience.
* Bonus Brew

**Remember:** Check trademark availability before launch.";

    fn suggester_with(response: &str, config: ExtractorConfig) -> NameSuggester<MockProvider> {
        NameSuggester::new(MockProvider::new(response), config).unwrap()
    }

    #[tokio::test]
    async fn test_full_suggestion_flow() {
        let suggester = suggester_with(GEMINI_STYLE_RESPONSE, ExtractorConfig::default());

        let result = suggester
            .suggest(SuggestionRequest::new("Ceramic Mug"))
            .await
            .unwrap();

        assert_eq!(
            result.markdown,
            "**Playful Names**:\n* Mugsy Morning\n* Sip Happens\n\
             **Elegant Names**:\n* **Porcelain Dawn**\n* Glaze & Grace\n* Bonus Brew"
        );
        assert_eq!(
            result.names,
            vec!["Mugsy Morning", "Sip Happens", "Porcelain Dawn", "Glaze & Grace", "Bonus Brew"]
        );
        assert_eq!(result.sections.len(), 2);
        assert_eq!(result.sections[1].title(), Some("Elegant Names"));
        assert!(!result.is_empty());
    }

    #[tokio::test]
    async fn test_stop_policy_drops_items_after_tip() {
        let suggester = suggester_with(GEMINI_STYLE_RESPONSE, ExtractorConfig::strict());
        assert_eq!(suggester.extractor().policy(), TerminatorPolicy::Stop);

        let result = suggester
            .suggest(SuggestionRequest::new("Ceramic Mug"))
            .await
            .unwrap();

        assert!(!result.names.contains(&"Bonus Brew".to_string()));
        assert_eq!(result.names.len(), 4);
    }

    #[tokio::test]
    async fn test_prose_only_response_is_empty_not_error() {
        let suggester = suggester_with(
            "I'm sorry, I can't help with naming that product.",
            ExtractorConfig::default(),
        );

        let result = suggester
            .suggest(SuggestionRequest::new("Mystery Box"))
            .await
            .unwrap();

        assert!(result.is_empty());
        assert!(result.names.is_empty());
        assert!(result.sections.is_empty());
    }

    #[tokio::test]
    async fn test_prompt_sent_to_provider() {
        let llm = MockProvider::new("* Lumo");
        let suggester = NameSuggester::new(llm.clone(), ExtractorConfig::default()).unwrap();

        let request = SuggestionRequest {
            title: "  Desk Lamp ".to_string(),
            count: Some(3),
            keywords: vec!["warm".to_string()],
        };
        suggester.suggest(request).await.unwrap();

        assert_eq!(llm.call_count(), 1);
        let prompt = llm.last_prompt().unwrap();
        assert!(prompt.contains("for a product titled Desk Lamp also"));
        assert!(prompt.contains("Suggest 3 names."));
        assert!(prompt.contains("warm"));
    }

    #[tokio::test]
    async fn test_metadata() {
        let llm = MockProvider::new("* Lumo").with_model_name("gemini-1.5-flash");
        let suggester = NameSuggester::new(llm, ExtractorConfig::default()).unwrap();

        let result = suggester
            .suggest(SuggestionRequest::new("Desk Lamp"))
            .await
            .unwrap();

        assert_eq!(result.metadata.product_title, "Desk Lamp");
        assert_eq!(result.metadata.model_name, "gemini-1.5-flash");
        assert_eq!(result.metadata.response_length, "* Lumo".len());
        assert!(result.metadata.timestamp > 0);
    }

    #[tokio::test]
    async fn test_blank_title_rejected() {
        let llm = MockProvider::new("* Lumo");
        let suggester = NameSuggester::new(llm.clone(), ExtractorConfig::default()).unwrap();

        let result = suggester.suggest(SuggestionRequest::new("   ")).await;
        assert!(matches!(result, Err(ExtractorError::InvalidTitle(_))));
        assert_eq!(llm.call_count(), 0, "LLM should not be called");
    }

    #[tokio::test]
    async fn test_title_length_limit() {
        let mut config = ExtractorConfig::default();
        config.max_title_length = 10;
        let suggester = suggester_with("* Lumo", config);

        let result = suggester
            .suggest(SuggestionRequest::new("a".repeat(11)))
            .await;
        assert!(matches!(result, Err(ExtractorError::TitleTooLong(11, 10))));
    }

    #[tokio::test]
    async fn test_response_length_limit() {
        let mut config = ExtractorConfig::default();
        config.max_response_length = 8;
        let suggester = suggester_with("* a very long name indeed", config);

        let result = suggester.suggest(SuggestionRequest::new("Lamp")).await;
        assert!(matches!(result, Err(ExtractorError::ResponseTooLong(_, 8))));
    }

    #[tokio::test]
    async fn test_llm_error_propagates() {
        let mut llm = MockProvider::default();
        llm.add_error(crate::PromptBuilder::new("Lamp".parse().unwrap()).build());
        let suggester = NameSuggester::new(llm, ExtractorConfig::default()).unwrap();

        let result = suggester.suggest(SuggestionRequest::new("Lamp")).await;
        assert!(matches!(result, Err(ExtractorError::Llm(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ExtractorConfig::default();
        config.max_response_length = 0;
        let result = NameSuggester::new(MockProvider::default(), config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    /// Provider that answers slower than the configured timeout
    struct SlowProvider;

    impl LlmProvider for SlowProvider {
        type Error = LlmError;

        fn generate(&self, _prompt: &str) -> Result<String, Self::Error> {
            std::thread::sleep(Duration::from_millis(2_500));
            Ok("* Too late".to_string())
        }
    }

    #[tokio::test]
    async fn test_generation_timeout() {
        let mut config = ExtractorConfig::default();
        config.generation_timeout_secs = 1;
        let suggester = NameSuggester::new(SlowProvider, config).unwrap();

        let result = suggester.suggest(SuggestionRequest::new("Lamp")).await;
        assert!(matches!(result, Err(ExtractorError::Timeout)));
    }

    #[tokio::test]
    async fn test_result_serializes_to_json() {
        let suggester = suggester_with("**Names**:\n* Lumo", ExtractorConfig::default());
        let result = suggester
            .suggest(SuggestionRequest::new("Lamp"))
            .await
            .unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["names"], serde_json::json!(["Lumo"]));
        assert_eq!(json["sections"][0]["header"], "**Names**:");
        assert_eq!(json["metadata"]["model_name"], "mock");
    }
}
