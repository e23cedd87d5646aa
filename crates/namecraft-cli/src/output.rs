//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use namecraft_extractor::{Section, SuggestionResult};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format extracted list text.
    pub fn format_extraction(&self, markdown: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "markdown": markdown,
            }))?),
            OutputFormat::Text => Ok(self.or_empty_notice(markdown)),
        }
    }

    /// Format list items grouped by header.
    pub fn format_sections(&self, sections: &[Section]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(sections)?),
            OutputFormat::Text => {
                if sections.is_empty() {
                    return Ok(self.warning("No list content found."));
                }

                let mut out = String::new();
                for section in sections {
                    let title = section.title().unwrap_or("(no header)");
                    out.push_str(&self.colorize(title, "cyan"));
                    out.push('\n');
                    for item in &section.items {
                        out.push_str(&format!("  - {}\n", item));
                    }
                }
                Ok(out.trim_end().to_string())
            }
        }
    }

    /// Format a suggestion result.
    pub fn format_suggestion(&self, result: &SuggestionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Text => {
                let heading = self.colorize(
                    &format!("Generated product names for {}", result.metadata.product_title),
                    "magenta",
                );
                Ok(format!("{}\n\n{}", heading, self.or_empty_notice(&result.markdown)))
            }
        }
    }

    fn or_empty_notice(&self, markdown: &str) -> String {
        if markdown.is_empty() {
            self.warning("No list content found.")
        } else {
            markdown.to_string()
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}
