//! LLM prompt for product name suggestions

use namecraft_domain::ProductTitle;

/// Builds prompts asking the LLM for product names
pub struct PromptBuilder {
    title: ProductTitle,
    count: Option<usize>,
    keywords: Vec<String>,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(title: ProductTitle) -> Self {
        Self {
            title,
            count: None,
            keywords: Vec::new(),
        }
    }

    /// Ask for a specific number of names
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count).filter(|c| *c > 0);
        self
    }

    /// Add keywords the names should evoke
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    /// Build the complete suggestion prompt
    pub fn build(&self) -> String {
        let mut prompt = format!(
            "Generate SEO friendly attractive name for a product titled {} \
             also make sure it is unique, catchy and accept all the SEO criteria.",
            self.title
        );

        if let Some(count) = self.count {
            prompt.push_str(&format!(" Suggest {} names.", count));
        }

        if !self.keywords.is_empty() {
            prompt.push_str(&format!(
                " The names should evoke: {}.",
                self.keywords.join(", ")
            ));
        }

        prompt.push(' ');
        prompt.push_str(LIST_ONLY_INSTRUCTION);
        prompt
    }
}

const LIST_ONLY_INSTRUCTION: &str = "The response should only contains the lists not any tips or tricks only send the lists.";
