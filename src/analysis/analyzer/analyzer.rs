//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is the whole path from raw document text to the ordered
//! stem sequence the classifier counts:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → stems
//! ```
//!
//! Any deterministic implementation can be handed to the classifier in
//! place of the default [`StemmingAnalyzer`](super::StemmingAnalyzer).
//!
//! # Examples
//!
//! ```
//! use stembayes::analysis::analyzer::Analyzer;
//! use stembayes::analysis::token::{Token, TokenStream};
//! use stembayes::error::Result;
//!
//! struct CommaAnalyzer;
//!
//! impl Analyzer for CommaAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         let tokens: Vec<Token> = text
//!             .split(',')
//!             .enumerate()
//!             .map(|(i, s)| Token::new(s.trim(), i))
//!             .collect();
//!         Ok(Box::new(tokens.into_iter()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "comma"
//!     }
//! }
//!
//! let stems = CommaAnalyzer.stems("a, b,c").unwrap();
//! assert_eq!(stems, vec!["a", "b", "c"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Implementations must be deterministic: the same text always yields the
/// same token sequence.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Ordered stem texts of the document, duplicates kept.
    fn stems(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
