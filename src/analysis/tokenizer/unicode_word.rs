//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). Accented Latin letters stay inside their word, and a run of
//! letters with embedded digits (`quimio5terápicos`) stays a single token.
//!
//! # Examples
//!
//! ```
//! use sabia::analysis::tokenizer::Tokenizer;
//! use sabia::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Bocaiúva, boçal!").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "Bocaiúva");
//! assert_eq!(tokens[1].text, "boçal");
//! ```

use std::iter;

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Segments without any alphanumeric character (whitespace, punctuation) are
/// dropped. Offsets are byte offsets into the input text. Tokens are
/// produced as the stream is pulled.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }

    /// Detect token type based on character content.
    fn detect_token_type(word: &str) -> TokenType {
        if word.chars().all(char::is_alphabetic) {
            TokenType::Word
        } else if word.chars().all(char::is_numeric) {
            TokenType::Num
        } else if word.chars().any(char::is_alphanumeric) {
            TokenType::Alphanum
        } else {
            TokenType::Other
        }
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let text = text.to_string();
        let mut offset = 0;
        let mut position = 0;

        // Segments are found one at a time, resuming at the last boundary.
        Ok(Box::new(iter::from_fn(move || {
            while offset < text.len() {
                let start_offset = offset;
                let word = text[offset..].split_word_bounds().next()?;
                offset += word.len();

                if word.chars().any(char::is_alphanumeric) {
                    let token = Token::with_offsets(word, position, start_offset, offset)
                        .with_token_type(Self::detect_token_type(word));
                    position += 1;
                    return Some(token);
                }
            }
            None
        })))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
