//! Naive Bayes training and scoring over a [`FrequencyStore`].
//!
//! # Scoring
//!
//! For a query's stems and each known category `c`:
//!
//! ```text
//! p = count(c, s) / docs(c)
//! q = (total(s) - count(c, s)) / (all_docs - docs(c))
//! score(c) = Σ p / (p + q)      over query stems s seen in training
//! ```
//!
//! A ratio with a zero denominator is 0, and a stem whose `p + q` is not
//! positive contributes nothing, so scores are always finite. Repeated query
//! stems contribute once per occurrence.

use std::sync::Arc;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, StemmingAnalyzer};
use crate::classifier::config::{ClassifierConfig, DocumentCounting};
use crate::classifier::store::FrequencyStore;
use crate::error::Result;

/// Score of one category for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Likelihood {
    pub category: String,
    pub score: f64,
}

impl Likelihood {
    pub fn new<S: Into<String>>(category: S, score: f64) -> Self {
        Likelihood {
            category: category.into(),
            score,
        }
    }
}

/// Incremental Naive Bayes text classifier.
///
/// Training takes `&mut self`, classification `&self`; a classifier can be
/// shared for reading once training is done.
pub struct NaiveBayesClassifier {
    analyzer: Arc<dyn Analyzer>,
    store: FrequencyStore,
    document_counting: DocumentCounting,
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

impl NaiveBayesClassifier {
    /// Create a classifier using the default stemming analyzer.
    ///
    /// Fails if the configured tokenizer pattern does not compile or, with
    /// validation enabled, if the initial state is inconsistent.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        let analyzer = StemmingAnalyzer::new(&config.analysis, config.stop_words)?;
        if config.validate_initial_state {
            config.initial_state.validate()?;
        }

        debug!(
            "Created classifier with {} stop word(s), {} initial categor(ies)",
            analyzer.stop_word_count(),
            config.initial_state.category_count()
        );

        Ok(NaiveBayesClassifier {
            analyzer: Arc::new(analyzer),
            store: config.initial_state,
            document_counting: config.document_counting,
        })
    }

    /// Create a classifier around a caller-supplied analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>, initial_state: FrequencyStore) -> Self {
        NaiveBayesClassifier {
            analyzer,
            store: initial_state,
            document_counting: DocumentCounting::default(),
        }
    }

    pub fn with_document_counting(mut self, document_counting: DocumentCounting) -> Self {
        self.document_counting = document_counting;
        self
    }

    /// Fold one labeled document into the model.
    pub fn train(&mut self, category: &str, text: &str) -> Result<()> {
        let stems = self.analyzer.stems(text)?;
        self.train_stems(category, &stems);
        Ok(())
    }

    /// Fold an already analyzed document into the model.
    ///
    /// Returns the number of stems counted. Zero stems leave the model
    /// untouched; in particular the category is not registered.
    pub fn train_stems<S: AsRef<str>>(&mut self, category: &str, stems: &[S]) -> usize {
        if stems.is_empty() {
            debug!("Nothing to train for category '{category}'");
            return 0;
        }

        for stem in stems {
            self.store.record(category, stem.as_ref());
            if self.document_counting == DocumentCounting::PerStemOccurrence {
                self.store.bump_document_count(category);
            }
        }
        if self.document_counting == DocumentCounting::PerDocument {
            self.store.bump_document_count(category);
        }

        debug!(
            "Trained {} stem(s) under category '{}'",
            stems.len(),
            category
        );
        stems.len()
    }

    /// Score every known category against `text`, best first.
    ///
    /// Empty when nothing has been trained. Ties keep ascending category
    /// order.
    pub fn classify(&self, text: &str) -> Result<Vec<Likelihood>> {
        let stems = self.analyzer.stems(text)?;
        Ok(self.classify_stems(&stems))
    }

    /// Score every known category against an already analyzed query.
    pub fn classify_stems<S: AsRef<str>>(&self, stems: &[S]) -> Vec<Likelihood> {
        let known: Vec<(&str, f64)> = stems
            .iter()
            .map(AsRef::as_ref)
            .filter_map(|stem| match self.store.stem_total(stem) {
                0 => None,
                total => Some((stem, total as f64)),
            })
            .collect();

        let all_documents = self.store.total_document_count() as f64;

        let mut likelihoods: Vec<Likelihood> = self
            .store
            .categories()
            .map(|category| {
                let category_documents = self.store.document_count(category) as f64;
                let other_documents = all_documents - category_documents;

                let score: f64 = known
                    .iter()
                    .map(|&(stem, total)| {
                        let count = self.store.stem_count(category, stem) as f64;
                        let p = ratio(count, category_documents);
                        let q = ratio(total - count, other_documents);
                        if p + q > 0.0 { p / (p + q) } else { 0.0 }
                    })
                    .sum();

                trace!("Category '{category}' scored {score}");
                Likelihood::new(category, score)
            })
            .collect();

        likelihoods.sort_by(|a, b| b.score.total_cmp(&a.score));
        likelihoods
    }

    /// The highest-scoring category, if any category is known.
    pub fn best_guess(&self, text: &str) -> Result<Option<Likelihood>> {
        Ok(self.classify(text)?.into_iter().next())
    }

    /// Known categories in ascending order.
    pub fn categories(&self) -> Vec<&str> {
        self.store.categories().collect()
    }

    pub fn total_document_count(&self) -> u64 {
        self.store.total_document_count()
    }

    pub fn document_counting(&self) -> DocumentCounting {
        self.document_counting
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    pub fn store(&self) -> &FrequencyStore {
        &self.store
    }

    /// Give up the classifier and keep its learned counters.
    pub fn into_store(self) -> FrequencyStore {
        self.store
    }
}

impl std::fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("analyzer", &self.analyzer.name())
            .field("categories", &self.store.category_count())
            .field("vocabulary", &self.store.vocabulary_size())
            .field("document_counting", &self.document_counting)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BayesError;

    fn classifier(stop_words: &[&str]) -> NaiveBayesClassifier {
        let config = ClassifierConfig::default().with_stop_words(stop_words.iter().copied());
        NaiveBayesClassifier::new(config).unwrap()
    }

    #[test]
    fn test_train_updates_counters() {
        let mut classifier = classifier(&["the"]);
        classifier.train("alice", "the cat sat").unwrap();

        let store = classifier.store();
        assert_eq!(store.stem_total("cat"), 1);
        assert_eq!(store.stem_total("sat"), 1);
        assert_eq!(store.stem_total("the"), 0);
        assert_eq!(store.stem_count("alice", "cat"), 1);
        assert_eq!(store.document_count("alice"), 2);
        assert_eq!(classifier.categories(), vec!["alice"]);
    }

    #[test]
    fn test_per_document_counting() {
        let mut classifier = classifier(&["the"])
            .with_document_counting(DocumentCounting::PerDocument);
        classifier.train("alice", "the cat sat").unwrap();
        classifier.train("alice", "cats").unwrap();

        assert_eq!(classifier.store().document_count("alice"), 2);
        assert_eq!(classifier.store().stem_total("cat"), 2);
    }

    #[test]
    fn test_empty_training_is_noop() {
        let mut classifier = classifier(&["the"]);
        classifier.train("alice", "").unwrap();
        classifier.train("alice", "the the").unwrap();

        assert!(classifier.store().is_empty());
        assert!(classifier.categories().is_empty());
    }

    #[test]
    fn test_alice_and_bob() {
        let mut classifier = classifier(&["the"]);
        classifier.train("alice", "the cat sat").unwrap();
        classifier.train("bob", "the dog ran").unwrap();

        let likelihoods = classifier.classify("cat").unwrap();
        assert_eq!(
            likelihoods,
            vec![Likelihood::new("alice", 1.0), Likelihood::new("bob", 0.0)]
        );
    }

    #[test]
    fn test_untrained_model() {
        let classifier = classifier(&[]);
        assert!(classifier.classify("anything").unwrap().is_empty());
        assert_eq!(classifier.best_guess("anything").unwrap(), None);
    }

    #[test]
    fn test_unseen_and_stop_words_score_zero() {
        let mut classifier = classifier(&["the"]);
        classifier.train("alice", "the cat").unwrap();
        classifier.train("bob", "the dog").unwrap();

        for query in ["the", "zebra", ""] {
            let likelihoods = classifier.classify(query).unwrap();
            assert_eq!(likelihoods.len(), 2);
            assert!(likelihoods.iter().all(|l| l.score == 0.0));
            assert_eq!(likelihoods[0].category, "alice");
        }
    }

    #[test]
    fn test_repeated_query_stems_are_additive() {
        let mut classifier = classifier(&[]);
        classifier.train("alice", "cat").unwrap();
        classifier.train("bob", "dog").unwrap();

        let once = classifier.classify("cat").unwrap();
        let twice = classifier.classify("cat cats").unwrap();
        assert_eq!(once[0].score, 1.0);
        assert_eq!(twice[0].score, 2.0);
    }

    #[test]
    fn test_single_category_is_finite() {
        let mut classifier = classifier(&[]);
        classifier.train("alice", "cat sat").unwrap();

        let likelihoods = classifier.classify("cat").unwrap();
        assert_eq!(likelihoods, vec![Likelihood::new("alice", 1.0)]);
    }

    #[test]
    fn test_zero_document_category_is_finite() {
        let initial = FrequencyStore::from_parts(
            vec![("cat".to_string(), 1)],
            vec![
                ("alice".to_string(), vec![("cat".to_string(), 1)]),
                ("bob".to_string(), vec![]),
            ],
            vec![("alice".to_string(), 1), ("bob".to_string(), 0)],
        );
        let config = ClassifierConfig::default().with_initial_state(initial);
        let classifier = NaiveBayesClassifier::new(config).unwrap();

        let likelihoods = classifier.classify("cat").unwrap();
        assert_eq!(likelihoods.len(), 2);
        assert!(likelihoods.iter().all(|l| l.score.is_finite()));
        assert_eq!(likelihoods[0].category, "alice");
        assert_eq!(likelihoods[1].score, 0.0);
    }

    #[test]
    fn test_initial_state_validation() {
        let broken = FrequencyStore::from_parts(
            vec![("cat".to_string(), 3)],
            vec![("alice".to_string(), vec![("cat".to_string(), 1)])],
            vec![("alice".to_string(), 1)],
        );

        let lenient = ClassifierConfig::default().with_initial_state(broken.clone());
        assert!(NaiveBayesClassifier::new(lenient).is_ok());

        let strict = ClassifierConfig::default()
            .with_initial_state(broken)
            .with_validation(true);
        let err = NaiveBayesClassifier::new(strict).unwrap_err();
        assert!(matches!(err, BayesError::InvalidState(_)));
    }

    #[test]
    fn test_initial_state_is_continued() {
        let mut first = classifier(&[]);
        first.train("alice", "cat").unwrap();
        let store = first.into_store();

        let config = ClassifierConfig::default().with_initial_state(store);
        let mut second = NaiveBayesClassifier::new(config).unwrap();
        second.train("alice", "cat").unwrap();

        assert_eq!(second.store().stem_count("alice", "cat"), 2);
        assert_eq!(second.total_document_count(), 2);
    }

    #[test]
    fn test_long_degenerate_word() {
        let mut classifier = classifier(&[]);
        let text = format!("hello {}ing", "y".repeat(200_000));

        classifier.train("alice", &text).unwrap();
        classifier.train("bob", "goodbye").unwrap();

        assert_eq!(classifier.store().document_count("alice"), 2);
        assert_eq!(classifier.best_guess(&text).unwrap().unwrap().category, "alice");
    }

    #[test]
    fn test_invalid_tokenizer_pattern() {
        use crate::analysis::config::AnalysisConfig;
        use crate::analysis::tokenizer::TokenizerKind;

        let analysis =
            AnalysisConfig::default().with_tokenizer(TokenizerKind::Regex(Some("(".to_string())));
        let result = NaiveBayesClassifier::new(ClassifierConfig::default().with_analysis(analysis));
        assert!(matches!(result, Err(BayesError::Analysis(_))));
    }
}
