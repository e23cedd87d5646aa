//! List extraction from generated text
//!
//! A single pass over the `'\n'`-separated lines of a response: each line is
//! classified with [`LineKind::classify`], header and list item lines are
//! kept in order, and everything else is dropped. The joined result is
//! trimmed of boundary whitespace.

use crate::config::TerminatorPolicy;
use crate::types::Section;
use namecraft_domain::traits::ListExtraction;
use namecraft_domain::line::trim_text;
use namecraft_domain::LineKind;
use tracing::debug;

/// Keeps only the header and list lines of generated text
///
/// # Examples
///
/// ```
/// use namecraft_extractor::ListExtractor;
///
/// let raw = "Intro text\n**Section**:\n* Item one\n* Item two\n**Remember:** be nice";
/// let extracted = ListExtractor::new().extract(raw);
/// assert_eq!(extracted, "**Section**:\n* Item one\n* Item two");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListExtractor {
    policy: TerminatorPolicy,
}

impl ListExtractor {
    /// Create an extractor that skips terminator lines
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with a specific terminator policy
    pub fn with_policy(policy: TerminatorPolicy) -> Self {
        Self { policy }
    }

    /// The terminator policy in use
    pub fn policy(&self) -> TerminatorPolicy {
        self.policy
    }

    /// Retained lines of `raw` with their kind, in input order
    pub fn retained_lines<'a>(&self, raw: &'a str) -> impl Iterator<Item = (LineKind, &'a str)> + 'a {
        let stop_at_terminator = self.policy == TerminatorPolicy::Stop;
        raw.split('\n')
            .map(|line| (LineKind::classify(line), line))
            .take_while(move |(kind, _)| !(stop_at_terminator && *kind == LineKind::Terminator))
            .filter(|(kind, _)| kind.is_retained())
    }

    /// Extract header and list lines, joined by newlines and trimmed
    ///
    /// Never fails. An empty result means no list content was found.
    pub fn extract(&self, raw: &str) -> String {
        let (kept, joined) = self.retained_lines(raw).fold(
            (0usize, String::with_capacity(raw.len())),
            |(kept, mut acc), (_, line)| {
                acc.push_str(line);
                acc.push('\n');
                (kept + 1, acc)
            },
        );

        debug!(
            "Kept {} lines ({} bytes in, policy '{}')",
            kept,
            raw.len(),
            self.policy.as_str()
        );

        trim_text(&joined).to_string()
    }

    /// Group the retained list items under their headers
    ///
    /// Items before the first header land in a section without a header.
    /// A header followed by no items still produces an (empty) section.
    pub fn sections(&self, raw: &str) -> Vec<Section> {
        let mut sections: Vec<Section> = Vec::new();

        for (kind, line) in self.retained_lines(raw) {
            match kind {
                LineKind::Header => sections.push(Section::new(Some(trim_text(line).to_string()))),
                LineKind::ListItem => {
                    let item = Section::item_text(line).to_string();
                    match sections.last_mut() {
                        Some(section) => section.items.push(item),
                        None => {
                            let mut section = Section::new(None);
                            section.items.push(item);
                            sections.push(section);
                        }
                    }
                }
                LineKind::Terminator | LineKind::Other => {}
            }
        }

        sections
    }
}

impl ListExtraction for ListExtractor {
    fn extract(&self, raw: &str) -> String {
        ListExtractor::extract(self, raw)
    }
}

/// Extract list content with the default (skip) terminator policy
pub fn extract_lists(raw: &str) -> String {
    ListExtractor::new().extract(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Intro text\n**Section**:\n* Item one\n* Item two\n**Remember:** be nice";

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_lists(""), "");
        assert_eq!(ListExtractor::with_policy(TerminatorPolicy::Stop).extract(""), "");
    }

    #[test]
    fn test_prose_only_yields_empty() {
        let raw = "Here are a few ideas.\n\nLet me know if you want more!";
        assert_eq!(extract_lists(raw), "");
    }

    #[test]
    fn test_pure_list_is_unchanged() {
        assert_eq!(extract_lists("* A\n* B\n* C"), "* A\n* B\n* C");
    }

    #[test]
    fn test_intro_and_remember_note_dropped() {
        assert_eq!(extract_lists(SAMPLE), "**Section**:\n* Item one\n* Item two");
        assert_eq!(
            ListExtractor::with_policy(TerminatorPolicy::Stop).extract(SAMPLE),
            "**Section**:\n* Item one\n* Item two"
        );
    }

    #[test]
    fn test_note_label_is_a_terminator() {
        let raw = "**Note:** some note\n* A";
        assert_eq!(ListExtractor::with_policy(TerminatorPolicy::Stop).extract(raw), "");
        assert_eq!(ListExtractor::with_policy(TerminatorPolicy::Skip).extract(raw), "* A");
    }

    #[test]
    fn test_skip_keeps_lists_after_terminator() {
        let raw = "* A\n**Remember:** check trademarks\n* B";
        assert_eq!(extract_lists(raw), "* A\n* B");
        assert_eq!(ListExtractor::with_policy(TerminatorPolicy::Stop).extract(raw), "* A");
    }

    #[test]
    fn test_indented_items_keep_indentation() {
        let raw = "**Names**:\n* Top\n  * Nested\n* Next";
        assert_eq!(extract_lists(raw), "**Names**:\n* Top\n  * Nested\n* Next");
    }

    #[test]
    fn test_leading_indentation_trimmed_at_boundary() {
        assert_eq!(extract_lists("   * First\n* Second   "), "* First\n* Second");
    }

    #[test]
    fn test_leading_byte_order_mark_trimmed() {
        assert_eq!(extract_lists("\u{FEFF}* A"), "* A");
        assert_eq!(extract_lists("\u{FEFF}Intro\n* A\n* B"), "* A\n* B");
    }

    #[test]
    fn test_blank_lines_between_items_removed() {
        assert_eq!(extract_lists("* A\n\n* B\n   \n* C"), "* A\n* B\n* C");
    }

    #[test]
    fn test_headers_followed_by_newline_only() {
        let raw = "**One**:\n* a\nprose\n**Two**:\n* b";
        assert_eq!(extract_lists(raw), "**One**:\n* a\n**Two**:\n* b");
    }

    #[test]
    fn test_unicode_and_dash_bullets_ignored() {
        assert_eq!(extract_lists("• Dot\n- Dash\n1. One\n* Star"), "* Star");
    }

    #[test]
    fn test_crlf_kept_on_inner_lines() {
        assert_eq!(extract_lists("* A\r\n* B\r\n"), "* A\r\n* B");
    }

    #[test]
    fn test_list_extraction_trait() {
        let extractor: &dyn ListExtraction = &ListExtractor::new();
        assert_eq!(extractor.extract("x\n* y"), "* y");
    }

    #[test]
    fn test_sections_group_items_under_headers() {
        let raw = "Sure!\n**Short Names**:\n* Lumo\n* Brio\n**Long Names**:\n* Lumo Desk Light\nEnjoy";
        let sections = ListExtractor::new().sections(raw);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title(), Some("Short Names"));
        assert_eq!(sections[0].items, vec!["Lumo", "Brio"]);
        assert_eq!(sections[1].title(), Some("Long Names"));
        assert_eq!(sections[1].items, vec!["Lumo Desk Light"]);
    }

    #[test]
    fn test_sections_items_before_header() {
        let sections = ListExtractor::new().sections("* Loose\n**Group**:\n* Inside");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].header, None);
        assert_eq!(sections[0].items, vec!["Loose"]);
        assert_eq!(sections[1].header.as_deref(), Some("**Group**:"));
    }

    #[test]
    fn test_sections_empty_header_kept() {
        let sections = ListExtractor::new().sections("**Empty**:\ntext only");
        assert_eq!(sections.len(), 1);
        assert!(sections[0].items.is_empty());
    }

    #[test]
    fn test_sections_respect_stop_policy() {
        let raw = "* A\n**Tip:** shorter is better\n* B";
        assert_eq!(ListExtractor::new().sections(raw)[0].items, vec!["A", "B"]);
        assert_eq!(
            ListExtractor::with_policy(TerminatorPolicy::Stop).sections(raw)[0].items,
            vec!["A"]
        );
    }
}
