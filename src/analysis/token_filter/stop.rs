//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! typically don't contribute to search relevance. The default list holds
//! Brazilian Portuguese articles, prepositions, pronouns and conjunctions,
//! written without diacritics (`nao`, `tambem`). Lookups compare the token as
//! it arrives, so put this filter after lowercasing.
//!
//! # Examples
//!
//! ```
//! use sabia::analysis::token_filter::Filter;
//! use sabia::analysis::token_filter::stop::StopFilter;
//! use sabia::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("a", 0),
//!     Token::new("boataria", 1),
//!     Token::new("de", 2),
//!     Token::new("quinta", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "boataria");
//! assert_eq!(result[1].text, "quinta");
//! assert_eq!(result[1].position_increment, 2);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::version::Version;
use crate::error::Result;

/// Default Brazilian Portuguese stop words.
const DEFAULT_BRAZILIAN_STOP_WORDS: &[&str] = &[
    "a", "ainda", "alem", "ambas", "ambos", "antes", "ao", "aonde", "aos", "apos", "aquele",
    "aqueles", "as", "assim", "com", "como", "contra", "contudo", "cuja", "cujas", "cujo",
    "cujos", "da", "das", "de", "dela", "dele", "deles", "demais", "depois", "desde", "desta",
    "deste", "dispoe", "dispoem", "diversa", "diversas", "diversos", "do", "dos", "durante", "e",
    "ela", "elas", "ele", "eles", "em", "entao", "entre", "essa", "essas", "esse", "esses", "esta",
    "estas", "este", "estes", "ha", "isso", "isto", "logo", "mais", "mas", "mediante", "menos",
    "mesma", "mesmas", "mesmo", "mesmos", "na", "nao", "nas", "nem", "nesse", "neste", "nos", "o",
    "os", "ou", "outra", "outras", "outro", "outros", "pelas", "pelo", "pelos", "perante", "pois",
    "por", "porque", "portanto", "propios", "proprio", "quais", "qual", "qualquer", "quando",
    "quanto", "que", "quem", "quer", "se", "seja", "sem", "sendo", "seu", "seus", "sob", "sobre",
    "sua", "suas", "tal", "tambem", "teu", "teus", "toda", "todas", "todo", "todos", "tua", "tuas",
    "tudo", "um", "uma", "umas", "uns",
];

/// Default Brazilian Portuguese stop words as a HashSet.
pub static DEFAULT_BRAZILIAN_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_BRAZILIAN_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// Keyword tokens are never treated as stop words.
///
/// Stop words can either be removed or marked as stopped while staying in
/// the stream. When removed, the gap they leave is added to the next token's
/// position increment, unless position increments are disabled (see
/// [`Version::enable_position_increments`]), in which case the following
/// positions are shifted down to close the gap.
///
/// # Examples
///
/// ```
/// use sabia::analysis::token_filter::Filter;
/// use sabia::analysis::token_filter::stop::StopFilter;
/// use sabia::analysis::token::Token;
///
/// // Mark as stopped but don't remove
/// let filter = StopFilter::from_words(vec!["o"]).remove_stopped(false);
/// let tokens = vec![Token::new("o", 0), Token::new("boi", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert!(result[0].is_stopped());
/// assert!(!result[1].is_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
    /// Whether removed tokens leave position gaps
    enable_position_increments: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default Brazilian Portuguese stop
    /// words.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabia::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("nao"));
    /// assert!(!filter.is_stop_word("boa"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_BRAZILIAN_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
            enable_position_increments: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use sabia::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["de", "da", "do"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Set whether removed tokens leave position gaps.
    pub fn enable_position_increments(mut self, enable: bool) -> Self {
        self.enable_position_increments = enable;
        self
    }

    /// Configure position increments the way `version` did.
    pub fn with_version(self, version: Version) -> Self {
        self.enable_position_increments(version.enable_position_increments())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        let remove_stopped = self.remove_stopped;
        let enable_position_increments = self.enable_position_increments;

        // Removed tokens since the last emitted one, and in total.
        let mut pending = 0;
        let mut removed = 0;

        Ok(Box::new(tokens.filter_map(move |token| {
            if token.is_stopped() {
                return Some(token);
            }

            if !token.is_keyword() && stop_words.contains(&token.text) {
                if !remove_stopped {
                    return Some(token.stop());
                }
                pending += token.position_increment;
                removed += 1;
                return None;
            }

            let token = if enable_position_increments {
                let increment = token.position_increment + pending;
                token.with_position_increment(increment)
            } else {
                let mut token = token;
                token.position = token.position.saturating_sub(removed);
                token
            };
            pending = 0;
            Some(token)
        })))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
