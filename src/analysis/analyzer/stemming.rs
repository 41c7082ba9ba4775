//! The classifier's default analyzer.
//!
//! # Pipeline
//!
//! 1. Tokenizer (regex `\w+` or Unicode word boundaries)
//! 2. LowercaseFilter (only when configured)
//! 3. StopFilter (the configured stop words, possibly none)
//! 4. StemFilter (Porter by default)
//!
//! # Examples
//!
//! ```
//! use stembayes::analysis::analyzer::{Analyzer, StemmingAnalyzer};
//! use stembayes::analysis::config::AnalysisConfig;
//!
//! let analyzer = StemmingAnalyzer::new(&AnalysisConfig::default(), ["the"]).unwrap();
//! assert_eq!(analyzer.stems("the cat sat").unwrap(), vec!["cat", "sat"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::config::AnalysisConfig;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, StemFilter, StopFilter};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer, TokenizerKind, UnicodeWordTokenizer};
use crate::error::Result;

/// Tokenize, drop stop words, stem.
pub struct StemmingAnalyzer {
    inner: PipelineAnalyzer,
    stop_filter: Arc<StopFilter>,
}

impl StemmingAnalyzer {
    /// Build the pipeline described by `config` with the given stop words.
    pub fn new<I, S>(config: &AnalysisConfig, stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokenizer: Arc<dyn Tokenizer> = match &config.tokenizer {
            TokenizerKind::Regex(None) => Arc::new(RegexTokenizer::new()?),
            TokenizerKind::Regex(Some(pattern)) => Arc::new(RegexTokenizer::with_pattern(pattern)?),
            TokenizerKind::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
        };
        let stop_filter = Arc::new(StopFilter::from_words(stop_words));

        let mut inner = PipelineAnalyzer::new(tokenizer);
        if config.lowercase {
            inner = inner.add_filter(Arc::new(LowercaseFilter::new()));
        }
        let inner = inner
            .add_filter(stop_filter.clone())
            .add_filter(Arc::new(StemFilter::with_stemmer(config.stemmer.build())))
            .with_name("stemming");

        Ok(StemmingAnalyzer { inner, stop_filter })
    }

    /// Check whether `word` is one of the configured stop words.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_filter.is_stop_word(word)
    }

    /// Number of configured stop words.
    pub fn stop_word_count(&self) -> usize {
        self.stop_filter.len()
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for StemmingAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "stemming"
    }
}

impl std::fmt::Debug for StemmingAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemmingAnalyzer")
            .field("inner", &self.inner)
            .field("stop_words", &self.stop_filter.len())
            .finish()
    }
}
