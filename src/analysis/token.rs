//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! which are the fundamental units that flow through the analysis pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single analyzed token with text, offsets and flags
//! - [`TokenType`] - Classification of token content (word, number, mixed)
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! Token streams are lazy: every filter maps the incoming iterator, so the
//! work for a token happens when the consumer pulls it.
//!
//! # Examples
//!
//! ```
//! use sabia::analysis::token::Token;
//!
//! let token = Token::with_offsets("boates", 0, 0, 6);
//! assert_eq!(token.text, "boates");
//! assert_eq!(token.end_offset, 6);
//! assert!(!token.is_keyword());
//!
//! let pinned = token.keyword();
//! assert!(pinned.is_keyword());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Position in the token stream (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in original text
/// - `position_increment` - Position relative to previous token (default: 1)
/// - `keyword` - Whether the token must bypass stemming
/// - `stopped` - Whether the token was marked for removal
/// - `token_type` - Classification assigned by the tokenizer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 1 (default): Normal increment, next position
    /// - >1: Skip positions (e.g., for removed stop words)
    pub position_increment: usize,

    /// Marks a token that must not be stemmed.
    ///
    /// Set by [`KeywordMarkerFilter`](crate::analysis::token_filter::keyword_marker::KeywordMarkerFilter)
    /// when the term is in the exclusion registry, or by an upstream component.
    pub keyword: bool,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,

    /// Token type classification
    pub token_type: TokenType,
}

/// Token type classification assigned by tokenizers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Letters only
    Word,
    /// Digits only
    Num,
    /// Letters mixed with digits or connectors
    Alphanum,
    /// Other/unknown token types
    Other,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            keyword: false,
            stopped: false,
            token_type: TokenType::Word,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as a keyword so stemmers leave it alone.
    pub fn keyword(mut self) -> Self {
        self.keyword = true;
        self
    }

    /// Check if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        self.keyword
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Replace the text, keeping offsets, position and flags.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
