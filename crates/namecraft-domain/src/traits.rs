//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (namecraft-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Name of the model answering prompts, used in result metadata
    fn model_name(&self) -> &str {
        "llm"
    }
}

/// Trait for pulling list content out of generated text
///
/// Implemented by the application layer (namecraft-extractor).
/// Extraction never fails; an empty string means no list content was found.
pub trait ListExtraction {
    /// Keep only header and list item lines of `raw`
    fn extract(&self, raw: &str) -> String;
}
