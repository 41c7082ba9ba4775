//! Configuration for the default analysis pipeline.

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::StemmerKind;
use crate::analysis::tokenizer::TokenizerKind;

/// How raw text becomes stems before stop-word removal and stemming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Tokenizer used to split documents into words.
    pub tokenizer: TokenizerKind,
    /// Stemmer applied after stop-word removal.
    pub stemmer: StemmerKind,
    /// Lower-case tokens before stop-word matching.
    ///
    /// Off by default: stop words match the raw token and the stemmer
    /// lower-cases its output.
    pub lowercase: bool,
}

impl AnalysisConfig {
    /// Use the given tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Use the given stemmer.
    pub fn with_stemmer(mut self, stemmer: StemmerKind) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Lower-case tokens before stop-word matching.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}
