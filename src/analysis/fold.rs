//! Diacritic folding for Brazilian Portuguese terms.
//!
//! Folding lowercases a word and, when the word is long enough, replaces
//! accented Latin letters with their base letter (`á` → `a`, `ç` → `c`,
//! `ñ` → `n`). Words of one or two characters keep their accents: short
//! accented tokens such as `é` or `já` are often meaningful as written.
//!
//! # Examples
//!
//! ```
//! use sabia::analysis::fold::DiacriticFolder;
//!
//! let folder = DiacriticFolder::new();
//!
//! assert_eq!(folder.fold("Brasília"), ("brasilia".to_string(), true));
//! assert_eq!(folder.fold("áé"), ("áé".to_string(), false));
//! assert_eq!(folder.fold("quimio5terápicos").0, "quimio5terapicos");
//! ```

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Words with fewer characters than this are lowercased but keep diacritics.
pub const MIN_FOLD_CHARS: usize = 3;

/// Lowercases words and strips diacritics from accented Latin letters.
///
/// The folder is stateless; one instance can be shared freely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiacriticFolder;

impl DiacriticFolder {
    /// Create a new folder.
    pub fn new() -> Self {
        DiacriticFolder
    }

    /// Fold a word, returning the normalized text and whether it differs from
    /// the input.
    pub fn fold(&self, word: &str) -> (String, bool) {
        let lowered = lowercase(word);

        let folded = if lowered.chars().count() >= MIN_FOLD_CHARS {
            lowered.chars().map(fold_char).collect()
        } else {
            lowered
        };

        let changed = folded != word;
        (folded, changed)
    }
}

/// Lowercase `text` one character at a time. Every character maps to a
/// single character, so the length in chars does not change (`İ` → `i`).
pub fn lowercase(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Map an accented Latin letter to its base letter. Any other character is
/// returned as is.
fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c;
    }

    let mut decomposed = std::iter::once(c).nfd();
    match decomposed.next() {
        Some(base) if base.is_ascii_alphabetic() && decomposed.all(is_combining_mark) => base,
        _ => c,
    }
}
