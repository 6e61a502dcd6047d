//! Brazilian Portuguese stemmer.
//!
//! The stemmer folds a term (see [`DiacriticFolder`]) and, when the folded
//! term is a plain word of reasonable length, strips suffixes with the rule
//! groups in [`rules`](super::rules). It is close to the Snowball Portuguese
//! algorithm but not identical: diacritics are removed, and a few rules give
//! different stems (`quintessência` → `quintessente` where Snowball gives
//! `quintessent`).
//!
//! # Examples
//!
//! ```
//! use sabia::analysis::token_filter::stem::Stemmer;
//! use sabia::analysis::token_filter::stem::brazilian::BrazilianStemmer;
//!
//! let stemmer = BrazilianStemmer::new();
//!
//! assert_eq!(stemmer.stem("boataria"), "boat");
//! assert_eq!(stemmer.stem("Brasília"), "brasil");
//! assert_eq!(stemmer.stem("quimio5terápicos"), "quimio5terapicos");
//! ```

use log::trace;

use super::Stemmer;
use super::rules::{
    RESIDUAL_CI, RESIDUAL_E, RESIDUAL_VOWEL, Regions, STANDARD_SUFFIX, VERB_SUFFIX,
};
use crate::analysis::fold::DiacriticFolder;

/// Shortest word (in chars) that is stemmed.
pub const MIN_STEM_CHARS: usize = 3;

/// Words this long (in chars) or longer are folded but not stemmed.
pub const MAX_STEM_CHARS: usize = 30;

/// Rule-based stemmer for Brazilian Portuguese.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrazilianStemmer {
    folder: DiacriticFolder,
}

impl BrazilianStemmer {
    /// Create a new Brazilian stemmer.
    pub fn new() -> Self {
        BrazilianStemmer {
            folder: DiacriticFolder::new(),
        }
    }

    /// Check whether a folded word goes through suffix stripping: letters
    /// only, and within the stemmed length range.
    pub fn is_stemmable(word: &str) -> bool {
        let len = word.chars().count();
        (MIN_STEM_CHARS..MAX_STEM_CHARS).contains(&len) && word.chars().all(char::is_alphabetic)
    }

    /// Strip suffixes from a lowercase, folded, letters-only word.
    ///
    /// Callers are expected to check [`is_stemmable`](Self::is_stemmable)
    /// first; [`Stemmer::stem`] does.
    pub fn strip_suffixes(&self, word: &str) -> String {
        let regions = Regions::of(word);
        let mut stem = word.to_string();

        let altered =
            STANDARD_SUFFIX.apply(&mut stem, &regions) || VERB_SUFFIX.apply(&mut stem, &regions);
        if altered {
            RESIDUAL_CI.apply(&mut stem, &regions);
        } else {
            RESIDUAL_VOWEL.apply(&mut stem, &regions);
        }
        RESIDUAL_E.apply(&mut stem, &regions);

        stem
    }
}

impl Stemmer for BrazilianStemmer {
    fn stem(&self, word: &str) -> String {
        let (folded, _) = self.folder.fold(word);
        if !Self::is_stemmable(&folded) {
            return folded;
        }

        let stem = self.strip_suffixes(&folded);
        trace!("stemmed '{word}' to '{stem}'");
        stem
    }

    fn name(&self) -> &'static str {
        "brazilian"
    }
}
