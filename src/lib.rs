//! # stembayes
//!
//! An incremental Naive Bayes text classifier over word stems.
//!
//! ## Features
//!
//! - Incremental training: every labeled document updates the model in place
//! - Ranked per-category scores for any text
//! - Pluggable text analysis (tokenizer, stop words, stemmer)
//! - Corpus loading from JSON arrays or JSON Lines
//!
//! ```
//! use stembayes::classifier::{ClassifierConfig, NaiveBayesClassifier};
//!
//! # fn main() -> stembayes::error::Result<()> {
//! let mut classifier = NaiveBayesClassifier::new(ClassifierConfig::default())?;
//! classifier.train("alice", "I love my cats")?;
//! classifier.train("bob", "dogs are the best")?;
//!
//! let guess = classifier.best_guess("cat videos")?;
//! assert_eq!(guess.map(|l| l.category), Some("alice".to_string()));
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, StemmingAnalyzer};
    pub use crate::analysis::config::AnalysisConfig;
    pub use crate::classifier::{
        ClassifierConfig, DocumentCounting, FrequencyStore, LabeledDocument, Likelihood,
        NaiveBayesClassifier,
    };
    pub use crate::error::{BayesError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
