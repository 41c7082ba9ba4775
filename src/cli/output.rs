//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::classifier::{Likelihood, NaiveBayesClassifier};
use crate::cli::args::{OutputFormat, StembayesArgs};
use crate::error::Result;

/// Rendering for the `human` output format.
pub trait HumanReadable {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Categories known to the trained model.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

/// Result of classifying one text.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub text: String,
    pub best_guess: Option<String>,
    pub likelihoods: Vec<Likelihood>,
}

impl ClassificationResult {
    pub fn new(text: &str, likelihoods: Vec<Likelihood>) -> Self {
        ClassificationResult {
            text: text.to_string(),
            best_guess: likelihoods.first().map(|l| l.category.clone()),
            likelihoods,
        }
    }
}

/// Model statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelStats {
    pub documents_loaded: usize,
    pub documents_trained: usize,
    pub category_count: usize,
    pub vocabulary_size: usize,
    pub total_document_count: u64,
    pub categories: Vec<CategoryStats>,
}

/// Per-category counters.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryStats {
    pub name: String,
    pub document_count: u64,
    pub distinct_stems: usize,
    pub stem_occurrences: u64,
}

impl ModelStats {
    pub fn collect(
        classifier: &NaiveBayesClassifier,
        documents_loaded: usize,
        documents_trained: usize,
    ) -> Self {
        let store = classifier.store();
        let categories = store
            .categories()
            .map(|name| {
                let stems = store.category_stems(name);
                CategoryStats {
                    name: name.to_string(),
                    document_count: store.document_count(name),
                    distinct_stems: stems.map_or(0, |stems| stems.len()),
                    stem_occurrences: stems.map_or(0, |stems| stems.values().sum()),
                }
            })
            .collect();

        ModelStats {
            documents_loaded,
            documents_trained,
            category_count: store.category_count(),
            vocabulary_size: store.vocabulary_size(),
            total_document_count: store.total_document_count(),
            categories,
        }
    }
}

impl HumanReadable for CategoryList {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.categories.is_empty() {
            return writeln!(out, "No categories were learned.");
        }
        writeln!(out, "The classifier knows about the following categories:")?;
        for category in &self.categories {
            writeln!(out, "- {category}")?;
        }
        Ok(())
    }
}

impl HumanReadable for ClassificationResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        let Some(best_guess) = &self.best_guess else {
            return writeln!(out, "The classifier has no categories yet.");
        };

        writeln!(out, "The classifier's best guess is {best_guess}.")?;
        writeln!(out)?;
        writeln!(out, "Below are the scores for each category.")?;
        for likelihood in &self.likelihoods {
            writeln!(out, "- {}: {}", likelihood.category, likelihood.score)?;
        }
        Ok(())
    }
}

impl HumanReadable for ModelStats {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Model Statistics:")?;
        writeln!(out, "═════════════════")?;
        writeln!(
            out,
            "Documents trained: {} of {}",
            self.documents_trained, self.documents_loaded
        )?;
        writeln!(out, "Categories: {}", self.category_count)?;
        writeln!(out, "Vocabulary size: {}", self.vocabulary_size)?;
        writeln!(out, "Total document count: {}", self.total_document_count)?;

        if !self.categories.is_empty() {
            writeln!(out)?;
            writeln!(out, "Per-category counters:")?;
            for category in &self.categories {
                writeln!(
                    out,
                    "  {}: {} documents, {} distinct stems, {} stem occurrences",
                    category.name,
                    category.document_count,
                    category.distinct_stems,
                    category.stem_occurrences
                )?;
            }
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T, W>(result: &T, args: &StembayesArgs, out: &mut W) -> Result<()>
where
    T: Serialize + HumanReadable,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => output_json(result, args, out)?,
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(result: &T, args: &StembayesArgs, out: &mut W) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}
