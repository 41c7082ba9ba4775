//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod pipeline;
mod stemming;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use stemming::StemmingAnalyzer;
