//! Configuration for the classifier.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::config::AnalysisConfig;
use crate::classifier::store::FrequencyStore;

/// How training bumps a category's document counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCounting {
    /// Once per stem occurrence: a document of `n` stems adds `n`.
    #[default]
    PerStemOccurrence,
    /// Once per training call that contributed at least one stem.
    PerDocument,
}

/// Settings used when constructing a
/// [`NaiveBayesClassifier`](super::NaiveBayesClassifier).
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfig {
    /// Words removed before stemming. Matched exactly.
    pub stop_words: HashSet<String>,

    /// Counters to start from instead of an empty store.
    pub initial_state: FrequencyStore,

    /// Tokenizer and stemmer selection.
    pub analysis: AnalysisConfig,

    pub document_counting: DocumentCounting,

    /// Reject an inconsistent `initial_state` at construction.
    pub validate_initial_state: bool,
}

impl ClassifierConfig {
    pub fn with_stop_words<I, S>(mut self, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = stop_words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_initial_state(mut self, initial_state: FrequencyStore) -> Self {
        self.initial_state = initial_state;
        self
    }

    pub fn with_analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = analysis;
        self
    }

    pub fn with_document_counting(mut self, document_counting: DocumentCounting) -> Self {
        self.document_counting = document_counting;
        self
    }

    pub fn with_validation(mut self, validate_initial_state: bool) -> Self {
        self.validate_initial_state = validate_initial_state;
        self
    }
}
