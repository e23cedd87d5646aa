//! Error types for the Extractor
//!
//! List extraction itself cannot fail; these errors come from the
//! suggestion pipeline around it.

use thiserror::Error;

/// Errors that can occur while suggesting names
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Product title is blank
    #[error("Invalid product title: {0}")]
    InvalidTitle(String),

    /// Product title exceeds maximum length
    #[error("Title too long: {0} chars (max: {1})")]
    TitleTooLong(usize, usize),

    /// Generated response exceeds maximum length
    #[error("Response too long: {0} bytes (max: {1})")]
    ResponseTooLong(usize, usize),

    /// Generation timeout
    #[error("Generation timeout")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
