//! Request and response types for list extraction and name suggestion

use namecraft_domain::line::{trim_text, BULLET, HEADER_PREFIX, HEADER_SUFFIX};
use serde::Serialize;

/// A header and the list items kept under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Header line as written (`**Names**:`), `None` before the first header
    pub header: Option<String>,

    /// Item text with the bullet marker removed
    pub items: Vec<String>,
}

impl Section {
    pub(crate) fn new(header: Option<String>) -> Self {
        Self {
            header,
            items: Vec::new(),
        }
    }

    /// Header text without the bold markers and trailing colon
    pub fn title(&self) -> Option<&str> {
        self.header.as_deref().map(|h| {
            let h = h.strip_prefix(HEADER_PREFIX).unwrap_or(h);
            h.strip_suffix(HEADER_SUFFIX).unwrap_or(h).trim()
        })
    }

    /// Text of a list item line without its bullet
    ///
    /// A bullet is `*` followed by whitespace or the end of the line. Lines
    /// that open with bold text (`**Name**`) have no bullet and are returned
    /// trimmed but otherwise whole.
    pub fn item_text(line: &str) -> &str {
        let trimmed = trim_text(line);
        match trimmed.strip_prefix(BULLET) {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim_start(),
            _ => trimmed,
        }
    }
}

/// Request to suggest product names
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    /// Product title the names are for
    pub title: String,

    /// How many names to ask for
    pub count: Option<usize>,

    /// Keywords the names should evoke
    pub keywords: Vec<String>,
}

impl SuggestionRequest {
    /// Request with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            count: None,
            keywords: Vec::new(),
        }
    }
}

/// Result of a suggestion run
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResult {
    /// Header and list lines kept from the response, as markdown
    pub markdown: String,

    /// Suggested names, in response order
    pub names: Vec<String>,

    /// Names grouped under their headers
    pub sections: Vec<Section>,

    /// Metadata about the run
    pub metadata: SuggestionMetadata,
}

impl SuggestionResult {
    /// Whether the response contained no list content
    pub fn is_empty(&self) -> bool {
        self.markdown.is_empty()
    }
}

/// Metadata about a suggestion run
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionMetadata {
    /// Normalized product title
    pub product_title: String,

    /// Timestamp when the suggestion ran (seconds since the Unix epoch)
    pub timestamp: u64,

    /// Name of the LLM model used
    pub model_name: String,

    /// Size of the raw LLM response in bytes
    pub response_length: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
