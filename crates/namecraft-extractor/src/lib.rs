//! Namecraft Extractor
//!
//! Pulls list content out of generated text and turns it into product name
//! suggestions.
//!
//! # Overview
//!
//! LLM answers to "suggest some names" prompts arrive as prose wrapped around
//! markdown bullets: a friendly preamble, one or more bold headers with
//! `*` lists under them, and a closing `**Remember:**` note. The
//! [`ListExtractor`] keeps only the header and list lines, in order.
//!
//! # Architecture
//!
//! ```text
//! ProductTitle → PromptBuilder → LLM → ListExtractor → names / markdown
//! ```
//!
//! # Key Features
//!
//! - **List Extraction**: Pure, single-pass line classification
//! - **Terminator Policy**: Skip or stop at commentary lines
//! - **Sections**: List items grouped under their headers
//! - **Name Suggestion**: Prompt building and LLM calls with timeouts
//!
//! # Example Usage
//!
//! ```no_run
//! use namecraft_extractor::{ExtractorConfig, NameSuggester, SuggestionRequest};
//! use namecraft_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new("Sure!\n**Names**:\n* Lumo\n* Brio\n**Remember:** check trademarks");
//! let suggester = NameSuggester::new(llm, ExtractorConfig::default())?;
//!
//! let result = suggester.suggest(SuggestionRequest::new("Desk Lamp")).await?;
//!
//! println!("{}", result.markdown);
//! println!("Names: {:?}", result.names);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod prompt;
mod extractor;
mod suggester;

#[cfg(test)]
mod tests;

pub use error::ExtractorError;
pub use config::{ExtractorConfig, TerminatorPolicy};
pub use types::{Section, SuggestionMetadata, SuggestionRequest, SuggestionResult};
pub use prompt::PromptBuilder;
pub use extractor::{extract_lists, ListExtractor};
pub use suggester::{names_in, NameSuggester};
