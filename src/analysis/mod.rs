//! Text analysis module for sabia.
//!
//! This module provides tokenization, filtering and analysis pipelines, with
//! the Brazilian Portuguese pieces (diacritic folding, stem exclusions and
//! the suffix stemmer) built on top of them.

pub mod analyzer;
pub mod exclusion;
pub mod fold;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
pub mod version;

// Re-export commonly used types
pub use analyzer::{
    Analyzer, AnalyzerPipeline, BrazilianAnalyzer, BrazilianAnalyzerConfig, PipelineAnalyzer,
};
pub use exclusion::ExclusionRegistry;
pub use fold::DiacriticFolder;
pub use token::{Token, TokenStream, TokenType};
pub use token_filter::{
    BrazilianStemmer, Filter, KeywordMarkerFilter, LowercaseFilter, StemFilter, Stemmer,
    StopFilter,
};
pub use tokenizer::{Tokenizer, UnicodeWordTokenizer};
pub use version::Version;
