//! Keyword marker filter implementation.
//!
//! Marks tokens found in an [`ExclusionRegistry`] as keywords so that later
//! filters, the stemmer in particular, leave them alone. The filter holds the
//! registry itself, not a snapshot, so installing a new set of terms takes
//! effect on the next token pulled through any stream built from it.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sabia::analysis::exclusion::ExclusionRegistry;
//! use sabia::analysis::token::Token;
//! use sabia::analysis::token_filter::Filter;
//! use sabia::analysis::token_filter::keyword_marker::KeywordMarkerFilter;
//!
//! let registry = Arc::new(ExclusionRegistry::from_terms(["quintessência"]));
//! let filter = KeywordMarkerFilter::new(Arc::clone(&registry));
//!
//! let tokens = vec![Token::new("quintessência", 0), Token::new("quinta", 1)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert!(result[0].is_keyword());
//! assert!(!result[1].is_keyword());
//! ```

use std::sync::Arc;

use crate::analysis::exclusion::ExclusionRegistry;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that flags registry terms as keywords.
#[derive(Clone, Debug)]
pub struct KeywordMarkerFilter {
    registry: Arc<ExclusionRegistry>,
}

impl KeywordMarkerFilter {
    /// Create a filter backed by a shared registry.
    pub fn new(registry: Arc<ExclusionRegistry>) -> Self {
        KeywordMarkerFilter { registry }
    }

    /// The registry consulted for each token.
    pub fn registry(&self) -> &Arc<ExclusionRegistry> {
        &self.registry
    }
}

impl Filter for KeywordMarkerFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let registry = Arc::clone(&self.registry);
        Ok(Box::new(tokens.map(move |token| {
            if token.is_stopped() || token.is_keyword() || !registry.contains(&token.text) {
                token
            } else {
                token.keyword()
            }
        })))
    }

    fn name(&self) -> &'static str {
        "keyword_marker"
    }
}
