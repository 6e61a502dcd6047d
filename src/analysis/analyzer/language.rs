//! Language-specific analyzers.
//!
//! # Available Languages
//!
//! - [`brazilian`] - Brazilian Portuguese: stop words, stem exclusions,
//!   diacritic folding and suffix stemming
//!
//! # Examples
//!
//! ```
//! use sabia::analysis::analyzer::analyzer::Analyzer;
//! use sabia::analysis::analyzer::language::brazilian::BrazilianAnalyzer;
//!
//! let analyzer = BrazilianAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Quilômetros de boiadas").unwrap().collect();
//!
//! // "de" is filtered as a stop word
//! assert_eq!(tokens.len(), 2);
//! ```

pub mod brazilian;
