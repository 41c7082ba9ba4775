//! Incremental Naive Bayes classification over word stems.
//!
//! The model is a [`FrequencyStore`] of stem/category counters. Training
//! folds a labeled document's stems into the store in place; classification
//! reads the current store and scores every known category.
//!
//! # Example
//!
//! ```
//! use stembayes::classifier::{ClassifierConfig, NaiveBayesClassifier};
//!
//! # fn main() -> stembayes::error::Result<()> {
//! let config = ClassifierConfig::default().with_stop_words(["the"]);
//! let mut classifier = NaiveBayesClassifier::new(config)?;
//!
//! classifier.train("alice", "the cat sat")?;
//! classifier.train("bob", "the dog ran")?;
//!
//! let likelihoods = classifier.classify("cat")?;
//! assert_eq!(likelihoods[0].category, "alice");
//! # Ok(())
//! # }
//! ```

mod config;
mod corpus;
mod naive_bayes;
mod store;

pub use config::{ClassifierConfig, DocumentCounting};
pub use corpus::{
    LabeledDocument, load_corpus, load_stop_words, parse_corpus, parse_stop_words, train_corpus,
};
pub use naive_bayes::{Likelihood, NaiveBayesClassifier};
pub use store::FrequencyStore;
