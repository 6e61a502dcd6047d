//! Token filter implementations for token transformation.
//!
//! Filters wrap the incoming stream lazily. Nothing is collected, so a filter
//! that reads shared state (the exclusion registry) reads it when the token is
//! pulled, not when the stream was built.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod keyword_marker;
pub mod lowercase;
pub mod stem;
pub mod stop;

// Re-export all filters for convenient access
pub use keyword_marker::KeywordMarkerFilter;
pub use lowercase::LowercaseFilter;
pub use stem::{BrazilianStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
