//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis in sabia. Analyzers combine a tokenizer and filters to turn raw
//! text into index terms.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`BrazilianAnalyzer`](super::language::brazilian::BrazilianAnalyzer) - Brazilian Portuguese
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use sabia::analysis::analyzer::analyzer::Analyzer;
//! use sabia::analysis::token::TokenStream;
//! use sabia::error::Result;
//!
//! struct NothingAnalyzer;
//!
//! impl Analyzer for NothingAnalyzer {
//!     fn analyze(&self, _text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "nothing"
//!     }
//!
//!     fn as_any(&self) -> &dyn std::any::Any {
//!         self
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so one analyzer can be shared across
/// threads. The streams it returns are not `Send`; each thread pulls its own.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a lazy stream of tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabia::analysis::analyzer::analyzer::Analyzer;
    /// use sabia::analysis::analyzer::language::brazilian::BrazilianAnalyzer;
    ///
    /// let analyzer = BrazilianAnalyzer::new();
    /// let tokens: Vec<_> = analyzer.analyze("A boataria de Brasília").unwrap().collect();
    ///
    /// // "a" and "de" are stop words
    /// assert_eq!(tokens.len(), 2);
    /// assert_eq!(tokens[0].text, "boat");
    /// assert_eq!(tokens[1].text, "brasil");
    /// ```
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Provide access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn std::any::Any;
}
