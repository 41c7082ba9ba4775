//! Command implementations for the stembayes CLI.

use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;

use log::info;

use crate::classifier::{NaiveBayesClassifier, load_corpus, train_corpus};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

const EXIT_COMMAND: &str = "exit";

/// Execute a CLI command against standard input and output.
pub fn execute_command(args: StembayesArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_command(&args, stdin.lock(), &mut stdout.lock())
}

/// Execute a CLI command against the given reader and writer.
pub fn run_command<R: BufRead, W: Write>(
    args: &StembayesArgs,
    input: R,
    out: &mut W,
) -> Result<()> {
    let (classifier, documents_loaded, documents_trained) = build_classifier(args.command.corpus())?;

    match &args.command {
        Command::Categories(_) => list_categories(&classifier, args, out),
        Command::Classify(classify_args) => {
            classify_text(&classifier, &classify_args.text, classify_args.limit, args, out)
        }
        Command::Interactive(interactive_args) => {
            run_interactive(&classifier, interactive_args.limit, args, input, out)
        }
        Command::Stats(_) => {
            let stats = ModelStats::collect(&classifier, documents_loaded, documents_trained);
            output_result(&stats, args, out)
        }
    }
}

/// Train a classifier on the corpus.
///
/// Returns the classifier with the number of loaded and contributing documents.
pub fn build_classifier(corpus: &CorpusArgs) -> Result<(NaiveBayesClassifier, usize, usize)> {
    let mut classifier = NaiveBayesClassifier::new(corpus.classifier_config()?)?;
    let documents = load_corpus(&corpus.corpus)?;
    let trained = train_corpus(&mut classifier, &documents)?;

    info!(
        "Trained on {} of {} document(s), {} categor(ies)",
        trained,
        documents.len(),
        classifier.store().category_count()
    );
    Ok((classifier, documents.len(), trained))
}

fn list_categories<W: Write>(
    classifier: &NaiveBayesClassifier,
    args: &StembayesArgs,
    out: &mut W,
) -> Result<()> {
    let list = CategoryList {
        categories: classifier
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    output_result(&list, args, out)
}

fn classify_text<W: Write>(
    classifier: &NaiveBayesClassifier,
    text: &str,
    limit: Option<NonZeroUsize>,
    args: &StembayesArgs,
    out: &mut W,
) -> Result<()> {
    let mut likelihoods = classifier.classify(text)?;
    if let Some(limit) = limit {
        likelihoods.truncate(limit.get());
    }
    output_result(&ClassificationResult::new(text, likelihoods), args, out)
}

/// Prompt for texts until `exit` (any case) or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    classifier: &NaiveBayesClassifier,
    limit: Option<NonZeroUsize>,
    args: &StembayesArgs,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let human = args.output_format == OutputFormat::Human;
    if human {
        list_categories(classifier, args, out)?;
    }

    let mut line = String::new();
    loop {
        if human {
            writeln!(out)?;
            writeln!(
                out,
                "Enter a text below and the classifier will guess its category. (Or type \"{EXIT_COMMAND}\" to leave.)"
            )?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches(['\r', '\n']);
        if text.trim().eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }

        if human {
            writeln!(out)?;
        }
        classify_text(classifier, text, limit, args, out)?;
    }
    Ok(())
}
