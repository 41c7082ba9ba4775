//! Command line argument parsing for the stembayes CLI using clap.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::config::AnalysisConfig;
use crate::analysis::token_filter::StemmerKind;
use crate::analysis::tokenizer::TokenizerKind;
use crate::classifier::{ClassifierConfig, DocumentCounting, load_stop_words};
use crate::error::Result;

/// stembayes - guess who wrote a short text
#[derive(Parser, Debug, Clone)]
#[command(name = "stembayes")]
#[command(about = "Train a Naive Bayes classifier on labeled texts and guess their authors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StembayesArgs {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StembayesArgs {
    /// Effective verbosity: 0 quiet, 1 normal, 2 verbose, 3+ debug.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the categories learned from a corpus
    Categories(CategoriesArgs),

    /// Classify a single text
    Classify(ClassifyArgs),

    /// Read texts from standard input and classify each one
    Interactive(InteractiveArgs),

    /// Show model statistics after training
    Stats(StatsArgs),
}

impl Command {
    pub fn corpus(&self) -> &CorpusArgs {
        match self {
            Command::Categories(args) => &args.corpus,
            Command::Classify(args) => &args.corpus,
            Command::Interactive(args) => &args.corpus,
            Command::Stats(args) => &args.corpus,
        }
    }
}

/// Training corpus and analysis options shared by every command
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Labeled corpus (JSON array or JSON Lines of {"category"|"user", "text"})
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Stop-word list, one word per line
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Additional stop word (repeatable)
    #[arg(long = "stop-word", value_name = "WORD")]
    pub stop_word: Vec<String>,

    /// Tokenizer
    #[arg(long, default_value = "regex")]
    pub tokenizer: TokenizerChoice,

    /// Word pattern for the regex tokenizer
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Stemmer
    #[arg(long, default_value = "porter")]
    pub stemmer: StemmerChoice,

    /// Lower-case tokens before stop-word matching
    #[arg(long)]
    pub lowercase: bool,

    /// Count each training document once instead of once per stem
    #[arg(long)]
    pub per_document_counts: bool,
}

impl CorpusArgs {
    pub fn analysis_config(&self) -> AnalysisConfig {
        let tokenizer = match self.tokenizer {
            TokenizerChoice::Regex => TokenizerKind::Regex(self.pattern.clone()),
            TokenizerChoice::UnicodeWord => TokenizerKind::UnicodeWord,
        };
        let stemmer = match self.stemmer {
            StemmerChoice::Porter => StemmerKind::Porter,
            StemmerChoice::Identity => StemmerKind::Identity,
        };

        AnalysisConfig::default()
            .with_tokenizer(tokenizer)
            .with_stemmer(stemmer)
            .with_lowercase(self.lowercase)
    }

    /// Build the classifier configuration, reading the stop-word file if given.
    pub fn classifier_config(&self) -> Result<ClassifierConfig> {
        let mut stop_words = match &self.stop_words {
            Some(path) => load_stop_words(path)?,
            None => Vec::new(),
        };
        stop_words.extend(self.stop_word.iter().cloned());

        let document_counting = if self.per_document_counts {
            DocumentCounting::PerDocument
        } else {
            DocumentCounting::PerStemOccurrence
        };

        Ok(ClassifierConfig::default()
            .with_stop_words(stop_words)
            .with_analysis(self.analysis_config())
            .with_document_counting(document_counting))
    }
}

/// Arguments for listing categories
#[derive(Args, Debug, Clone)]
pub struct CategoriesArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Arguments for classifying one text
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Only show the best N categories
    #[arg(short, long)]
    pub limit: Option<NonZeroUsize>,
}

/// Arguments for the interactive prompt
#[derive(Args, Debug, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Only show the best N categories
    #[arg(short, long)]
    pub limit: Option<NonZeroUsize>,
}

/// Arguments for model statistics
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenizerChoice {
    /// Regular expression word matches
    Regex,
    /// Unicode word boundaries
    UnicodeWord,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerChoice {
    /// Porter stemmer
    Porter,
    /// Keep words as they are
    Identity,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
