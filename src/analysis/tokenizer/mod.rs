//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the text analysis pipeline, responsible
//! for splitting input text into word tokens with byte offsets. The Brazilian
//! analyzer only classifies, normalizes and stems what a tokenizer hands it,
//! so any implementation of [`Tokenizer`] can be plugged in.
//!
//! # Available Tokenizers
//!
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//!
//! # Examples
//!
//! ```
//! use sabia::analysis::tokenizer::Tokenizer;
//! use sabia::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Olá, Brasília!").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can back analyzers used
/// from several threads.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use sabia::analysis::token::{Token, TokenStream};
/// use sabia::analysis::tokenizer::Tokenizer;
/// use sabia::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Produced tokens must have non-empty text and offsets pointing into
    /// `text`.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod unicode_word;

pub use unicode_word::UnicodeWordTokenizer;
