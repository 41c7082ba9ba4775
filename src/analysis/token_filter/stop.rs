//! Stop filter implementation.
//!
//! Removes configured stop words from the token stream. Matching is exact,
//! on the token text as it arrives at the filter, and happens before
//! stemming.
//!
//! # Examples
//!
//! ```
//! use stembayes::analysis::token::Token;
//! use stembayes::analysis::token_filter::{Filter, StopFilter};
//!
//! let filter = StopFilter::from_words(vec!["the"]);
//! let tokens = vec![Token::new("the", 0), Token::new("cat", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "cat");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
///
/// The set is immutable once the filter is built. An empty set makes the
/// filter a pass-through, which is the classifier's default.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        if self.stop_words.is_empty() {
            return Ok(tokens);
        }

        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
            Token::new("and", 3),
            Token::new("test", 4),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
    }

    #[test]
    fn test_stop_filter_is_case_sensitive() {
        let filter = StopFilter::from_words(vec!["the"]);
        let tokens = vec![Token::new("The", 0), Token::new("the", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "The");
    }

    #[test]
    fn test_empty_stop_filter_passes_everything() {
        let filter = StopFilter::default();
        assert!(filter.is_empty());

        let tokens = vec![Token::new("the", 0), Token::new("cat", 1)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::default().name(), "stop");
    }
}
