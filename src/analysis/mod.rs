//! Text analysis for the classifier.
//!
//! The classifier never looks at raw text: it consumes the ordered stem
//! sequence produced by an [`Analyzer`]. This module provides the default
//! pipeline (tokenizer, stop-word removal, stemming) and the traits for
//! plugging in a different one.

pub mod analyzer;
pub mod config;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use config::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
