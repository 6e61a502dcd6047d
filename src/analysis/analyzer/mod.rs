//! Analyzer implementations that combine tokenizers and filters.

pub mod analyzer;
pub mod language;
pub mod pipeline;
pub mod reusable;

pub use analyzer::Analyzer;
pub use language::brazilian::{BrazilianAnalyzer, BrazilianAnalyzerConfig};
pub use pipeline::PipelineAnalyzer;
pub use reusable::AnalyzerPipeline;
