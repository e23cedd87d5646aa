//! Product title value object

/// Title of the product that names are suggested for
///
/// Always trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductTitle(String);

impl ProductTitle {
    /// Create a new product title
    ///
    /// # Errors
    /// Returns error if the title is blank after trimming
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("Product title cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get title as string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for ProductTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ProductTitle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        let title = ProductTitle::new("  Ceramic Mug \n").unwrap();
        assert_eq!(title.as_str(), "Ceramic Mug");
        assert_eq!(title.to_string(), "Ceramic Mug");
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(ProductTitle::new("").is_err());
        assert!(ProductTitle::new("   \t").is_err());
    }

    #[test]
    fn test_char_len_counts_characters() {
        let title = ProductTitle::new("Café").unwrap();
        assert_eq!(title.char_len(), 4);
    }

    #[test]
    fn test_from_str() {
        let title: ProductTitle = "Desk Lamp".parse().unwrap();
        assert_eq!(title.as_str(), "Desk Lamp");
    }
}
