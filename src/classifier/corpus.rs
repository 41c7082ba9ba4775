//! Labeled training corpora and stop-word lists.
//!
//! A corpus is either a JSON array of objects or JSON Lines, one object
//! per line. Each object carries a `category` (or `user`) and a `text`;
//! other fields are ignored.
//!
//! ```json
//! [
//!   {"user": "alice", "text": "the cat sat"},
//!   {"category": "bob", "text": "the dog ran"}
//! ]
//! ```

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::classifier::naive_bayes::NaiveBayesClassifier;
use crate::error::{BayesError, Result};

/// One training example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledDocument {
    #[serde(alias = "user")]
    pub category: String,
    pub text: String,
}

impl LabeledDocument {
    pub fn new<C: Into<String>, T: Into<String>>(category: C, text: T) -> Self {
        LabeledDocument {
            category: category.into(),
            text: text.into(),
        }
    }
}

/// Parse a corpus from a JSON array or from JSON Lines.
pub fn parse_corpus(content: &str) -> Result<Vec<LabeledDocument>> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<LabeledDocument>(line)
                .map_err(|e| BayesError::corpus(format!("line {}: {e}", index + 1)))
        })
        .collect()
}

/// Load a corpus file.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledDocument>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let documents = parse_corpus(&content)?;
    info!(
        "Loaded {} document(s) from {}",
        documents.len(),
        path.display()
    );
    Ok(documents)
}

/// Parse a stop-word list: one word per line, `#` starts a comment line.
pub fn parse_stop_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load a stop-word list file.
pub fn load_stop_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let words = parse_stop_words(&content);
    info!("Loaded {} stop word(s) from {}", words.len(), path.display());
    Ok(words)
}

/// Train on every document in order.
///
/// Returns how many documents contributed at least one stem.
pub fn train_corpus(
    classifier: &mut NaiveBayesClassifier,
    documents: &[LabeledDocument],
) -> Result<usize> {
    let mut trained = 0;
    for document in documents {
        let stems = classifier.analyzer().stems(&document.text)?;
        if classifier.train_stems(&document.category, &stems) > 0 {
            trained += 1;
        }
    }

    let skipped = documents.len() - trained;
    if skipped > 0 {
        warn!("{skipped} document(s) had no stems after analysis and were skipped");
    }
    Ok(trained)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::classifier::config::ClassifierConfig;

    #[test]
    fn test_parse_json_array() {
        let content = r#"[
            {"user": "alice", "text": "the cat sat", "id": 7},
            {"category": "bob", "text": "the dog ran"}
        ]"#;

        let documents = parse_corpus(content).unwrap();
        assert_eq!(
            documents,
            vec![
                LabeledDocument::new("alice", "the cat sat"),
                LabeledDocument::new("bob", "the dog ran"),
            ]
        );
    }

    #[test]
    fn test_parse_json_lines() {
        let content = "{\"user\": \"alice\", \"text\": \"a\"}\n\n{\"user\": \"bob\", \"text\": \"b\"}\n";

        let documents = parse_corpus(content).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[1].category, "bob");
    }

    #[test]
    fn test_parse_json_lines_reports_line() {
        let content = "{\"user\": \"alice\", \"text\": \"a\"}\n{\"user\": \"bob\"}\n";

        let err = parse_corpus(content).unwrap_err();
        assert!(matches!(err, BayesError::Corpus(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_empty_corpus() {
        assert!(parse_corpus("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_stop_words() {
        let words = parse_stop_words("# common words\nthe\n\n  a  \n#an\n");
        assert_eq!(words, vec!["the", "a"]);
    }

    #[test]
    fn test_load_files() -> Result<()> {
        let mut corpus = NamedTempFile::new()?;
        writeln!(corpus, r#"{{"user": "alice", "text": "the cat sat"}}"#)?;
        writeln!(corpus, r#"{{"user": "bob", "text": "the dog ran"}}"#)?;

        let mut stop_words = NamedTempFile::new()?;
        writeln!(stop_words, "the")?;

        let documents = load_corpus(corpus.path())?;
        let stop_words = load_stop_words(stop_words.path())?;
        assert_eq!(documents.len(), 2);
        assert_eq!(stop_words, vec!["the"]);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_corpus("/nonexistent/corpus.json");
        assert!(matches!(result, Err(BayesError::Io(_))));
    }

    #[test]
    fn test_train_corpus_counts_contributing_documents() -> Result<()> {
        let config = ClassifierConfig::default().with_stop_words(["the"]);
        let mut classifier = NaiveBayesClassifier::new(config)?;
        let documents = vec![
            LabeledDocument::new("alice", "the cat sat"),
            LabeledDocument::new("carol", "the"),
            LabeledDocument::new("bob", "the dog ran"),
        ];

        let trained = train_corpus(&mut classifier, &documents)?;
        assert_eq!(trained, 2);
        assert_eq!(classifier.categories(), vec!["alice", "bob"]);
        Ok(())
    }
}
