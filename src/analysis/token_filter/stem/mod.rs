//! Stemming token filter and stemmer implementations.

use serde::{Deserialize, Serialize};

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod identity;
pub mod porter;

// Re-export stemmers
pub use identity::IdentityStemmer;
pub use porter::PorterStemmer;

/// Stemmer selection for [`AnalysisConfig`](crate::analysis::config::AnalysisConfig).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StemmerKind {
    /// Classic Porter stemmer (lower-cases its output).
    #[default]
    Porter,
    /// Leaves tokens unchanged.
    Identity,
}

impl StemmerKind {
    /// Build the stemmer this kind names.
    pub fn build(self) -> Box<dyn Stemmer> {
        match self {
            StemmerKind::Porter => Box::new(PorterStemmer::new()),
            StemmerKind::Identity => Box::new(IdentityStemmer::new()),
        }
    }
}

/// Filter that applies stemming to tokens.
pub struct StemFilter {
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the Porter stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Box::new(PorterStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// Name of the wrapped stemmer.
    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let stemmed = self.stemmer.stem(&token.text);
                token.with_text(stemmed)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new();
        let tokens = vec![
            Token::new("Running", 0),
            Token::new("flies", 1),
            Token::new("tests", 2),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "run");
        assert_eq!(result[1].text, "fli");
        assert_eq!(result[2].text, "test");
    }

    #[test]
    fn test_stemmer_kind_build() {
        assert_eq!(StemmerKind::Porter.build().name(), "porter");
        assert_eq!(StemmerKind::Identity.build().name(), "identity");
        assert_eq!(StemmerKind::default(), StemmerKind::Porter);
    }

    #[test]
    fn test_filter_name() {
        let filter = StemFilter::with_stemmer(Box::new(IdentityStemmer::new()));
        assert_eq!(filter.name(), "stem");
        assert_eq!(filter.stemmer_name(), "identity");
    }
}
