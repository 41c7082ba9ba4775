//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline: they split the
//! raw document into word tokens.
//!
//! # Examples
//!
//! ```
//! use stembayes::analysis::tokenizer::{RegexTokenizer, Tokenizer};
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Yes we can").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Tokenizer selection for [`AnalysisConfig`](crate::analysis::config::AnalysisConfig).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenizerKind {
    /// Regex tokenizer; `None` uses the default `\w+` word pattern.
    Regex(Option<String>),
    /// Unicode (UAX #29) word boundaries.
    UnicodeWord,
}

impl Default for TokenizerKind {
    fn default() -> Self {
        TokenizerKind::Regex(None)
    }
}

pub mod regex;
pub mod unicode_word;

pub use self::regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
