//! Line classification for generated list text
//!
//! Generated answers mix prose with bold section headers and `*` bullets.
//! Every line falls into exactly one [`LineKind`]; the checks run in a fixed
//! order so a line matching several rules takes the first one.

/// Marker that opens the trailing "remember" note of a generated answer
pub const REMEMBER_MARKER: &str = "**Remember:**";

/// A bolded label followed by a colon (`**Note:**`), used for annotations
pub const ANNOTATION_MARKER: &str = ":**";

/// Prefix of a bold section header
pub const HEADER_PREFIX: &str = "**";

/// Suffix of a bold section header (`**Section**:`)
pub const HEADER_SUFFIX: &str = "**:";

/// Bullet character recognized for list items
pub const BULLET: char = '*';

/// Byte order mark some responses start with
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Trim whitespace and byte order marks from both ends
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Kind of a single line of generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Commentary marker; the line is never kept
    Terminator,

    /// Bold section header such as `**Names**:`
    Header,

    /// Bullet line whose trimmed form starts with `*`
    ListItem,

    /// Prose or blank line
    Other,
}

impl LineKind {
    /// Classify a single line (without its trailing newline)
    ///
    /// Terminator markers are checked before the header shape, so a line
    /// such as `**Note:**:` is a terminator even though it looks like a header.
    pub fn classify(line: &str) -> Self {
        if line.contains(REMEMBER_MARKER) || line.contains(ANNOTATION_MARKER) {
            LineKind::Terminator
        } else if line.starts_with(HEADER_PREFIX) && line.ends_with(HEADER_SUFFIX) {
            LineKind::Header
        } else if trim_text(line).starts_with(BULLET) {
            LineKind::ListItem
        } else {
            LineKind::Other
        }
    }

    /// Whether lines of this kind are copied into the extracted output
    pub fn is_retained(&self) -> bool {
        matches!(self, LineKind::Header | LineKind::ListItem)
    }

    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Terminator => "terminator",
            LineKind::Header => "header",
            LineKind::ListItem => "list_item",
            LineKind::Other => "other",
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_line() {
        assert_eq!(LineKind::classify("**Section Name**:"), LineKind::Header);
    }

    #[test]
    fn test_list_item_lines() {
        assert_eq!(LineKind::classify("* Item one"), LineKind::ListItem);
        assert_eq!(LineKind::classify("  * nested item"), LineKind::ListItem);
        assert_eq!(LineKind::classify("\t*tabbed"), LineKind::ListItem);
        assert_eq!(LineKind::classify("*"), LineKind::ListItem);
    }

    #[test]
    fn test_remember_marker_is_terminator() {
        assert_eq!(LineKind::classify("**Remember:** be nice"), LineKind::Terminator);
    }

    #[test]
    fn test_bold_label_is_terminator() {
        assert_eq!(LineKind::classify("**Note:** some note"), LineKind::Terminator);
        assert_eq!(LineKind::classify("* **Tip:** keep it short"), LineKind::Terminator);
    }

    #[test]
    fn test_terminator_wins_over_header() {
        assert_eq!(LineKind::classify("**Note:**:"), LineKind::Terminator);
    }

    #[test]
    fn test_header_needs_colon_suffix() {
        // Bold without the trailing colon is still a bullet-looking line
        assert_eq!(LineKind::classify("**Bold intro**"), LineKind::ListItem);
        assert_eq!(LineKind::classify("**Section**: trailing"), LineKind::ListItem);
    }

    #[test]
    fn test_indented_header_is_list_item() {
        assert_eq!(LineKind::classify("  **Section**:"), LineKind::ListItem);
    }

    #[test]
    fn test_other_lines() {
        assert_eq!(LineKind::classify(""), LineKind::Other);
        assert_eq!(LineKind::classify("   "), LineKind::Other);
        assert_eq!(LineKind::classify("Here are some names"), LineKind::Other);
        assert_eq!(LineKind::classify("- dash bullet"), LineKind::Other);
        assert_eq!(LineKind::classify("• unicode bullet"), LineKind::Other);
        assert_eq!(LineKind::classify("1. ordered"), LineKind::Other);
    }

    #[test]
    fn test_byte_order_mark_before_bullet() {
        assert_eq!(LineKind::classify("\u{FEFF}* A"), LineKind::ListItem);
        assert_eq!(LineKind::classify("\u{FEFF}"), LineKind::Other);
    }

    #[test]
    fn test_trim_text() {
        assert_eq!(trim_text("\u{FEFF}  * A \r"), "* A");
        assert_eq!(trim_text("\u{FEFF}\u{FEFF}"), "");
        assert_eq!(trim_text("a\u{FEFF}b"), "a\u{FEFF}b");
    }

    #[test]
    fn test_retained_kinds() {
        assert!(LineKind::Header.is_retained());
        assert!(LineKind::ListItem.is_retained());
        assert!(!LineKind::Terminator.is_retained());
        assert!(!LineKind::Other.is_retained());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any line carrying the annotation marker is a terminator
        #[test]
        fn test_annotation_marker_always_terminates(prefix in ".{0,20}", suffix in ".{0,20}") {
            let line = format!("{}{}{}", prefix, ANNOTATION_MARKER, suffix);
            prop_assert_eq!(LineKind::classify(&line), LineKind::Terminator);
        }

        /// Property: prose without markers is never retained
        #[test]
        fn test_plain_prose_is_other(line in "[a-zA-Z0-9 ,.!?]{0,60}") {
            prop_assert_eq!(LineKind::classify(&line), LineKind::Other);
        }
    }
}
