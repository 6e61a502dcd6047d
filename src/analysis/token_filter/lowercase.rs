//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use sabia::analysis::token_filter::Filter;
//! use sabia::analysis::token_filter::lowercase::LowercaseFilter;
//! use sabia::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Brasília", 0), Token::new("QUINTAL", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "brasília");
//! assert_eq!(filtered[1].text, "quintal");
//! ```

use crate::analysis::fold::lowercase;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Lowercasing is Unicode-aware, so accented capitals (`Á`, `Ç`) map to their
/// accented lowercase forms. Diacritics are kept; removing them is the
/// stemmer's job.
///
/// Each character maps to exactly one character, so a token keeps its
/// length in chars (`İ` becomes `i`, not `i̇`). The folder's length
/// threshold then sees the token as it was written.
///
/// # Behavior
///
/// - Skips tokens marked as stopped or as keywords
/// - Preserves token positions and offsets
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            if token.is_stopped() || token.is_keyword() {
                token
            } else {
                let lowered = lowercase(&token.text);
                token.with_text(lowered)
            }
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("Quintessência", 0),
            Token::new("BOÇAL", 1),
            Token::new("Test", 2).stop(),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "quintessência");
        assert_eq!(result[1].text, "boçal");
        assert_eq!(result[2].text, "Test"); // Stopped tokens are not processed
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_keyword_tokens_are_kept() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::new("SãoPaulo", 0).keyword()];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "SãoPaulo");
    }

    #[test]
    fn test_length_in_chars_is_kept() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::new("İ", 0), Token::new("İÉ", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "i");
        assert_eq!(result[1].text, "ié");
        assert_eq!(result[1].text.chars().count(), 2);
    }

    #[test]
    fn test_filter_is_lazy() {
        let filter = LowercaseFilter::new();
        let tokens = (0..).map(|i| Token::new("BOA", i));

        let mut result = filter.filter(Box::new(tokens)).unwrap();

        assert_eq!(result.next().unwrap().text, "boa");
        assert_eq!(result.next().unwrap().position, 1);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
