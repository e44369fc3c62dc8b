use std::collections::HashSet;

use crate::config::TokenizerConfig;

/// Whitespace tokenizer with optional lowercasing
///
/// Punctuation is kept as part of the token, so `"world!"` and `"world"` are
/// distinct terms.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a new tokenizer from configuration
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Normalize a single word the way indexed terms are normalized
    pub fn normalize(&self, word: &str) -> String {
        if self.config.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }

    /// Tokenize text into a vector of terms, in order, duplicates kept
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| self.normalize(word))
            .collect()
    }

    /// Get unique terms from text
    pub fn unique_terms(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }
}
