//! Token filter implementations for token transformation.
//!
//! Filters receive the tokenizer's output and rewrite it. The classifier's
//! default chain is:
//!
//! ```text
//! Tokenizer → [Lowercase] → Stop Words → Stemmer → stems
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lowercase;
pub mod stem;
pub mod stop;

// Re-export all filters for convenient access
pub use lowercase::LowercaseFilter;
pub use stem::{IdentityStemmer, PorterStemmer, StemFilter, Stemmer, StemmerKind};
pub use stop::StopFilter;
