//! Shared, mutable set of terms that must not be stemmed.
//!
//! An [`ExclusionRegistry`] is owned by the caller and handed to analyzers as
//! an `Arc`. Filters keep the `Arc`, never a copy of the set, so a call to
//! [`install`](ExclusionRegistry::install) is observed by the very next token
//! any pipeline processes, including pipelines that are being reused.
//!
//! Terms are stored in folded form (see [`DiacriticFolder`]), and lookups are
//! folded the same way, so `Quintessência`, `quintessência` and
//! `quintessencia` all hit the same entry.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use sabia::analysis::exclusion::ExclusionRegistry;
//!
//! let registry = Arc::new(ExclusionRegistry::new());
//! assert!(!registry.contains("quintessência"));
//!
//! registry.install(["quintessência"]);
//! assert!(registry.contains("quintessência"));
//! assert!(registry.contains("Quintessencia"));
//! ```

use std::sync::Arc;

use ahash::AHashSet;
use log::debug;
use parking_lot::RwLock;

use crate::analysis::fold::DiacriticFolder;

/// A replaceable set of protected terms.
///
/// The active set sits behind an `Arc` inside a lock: `install` builds the new
/// set first and swaps the pointer, so readers only ever see a complete set.
#[derive(Debug, Default)]
pub struct ExclusionRegistry {
    terms: RwLock<Arc<AHashSet<String>>>,
    folder: DiacriticFolder,
}

impl ExclusionRegistry {
    /// Create an empty registry. Nothing is excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the given terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let registry = Self::new();
        registry.install(terms);
        registry
    }

    /// Replace the active set with `terms`.
    ///
    /// Every lookup that starts after this call returns sees the new set.
    pub fn install<I, S>(&self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: AHashSet<String> = terms
            .into_iter()
            .map(|term| self.normalize(term.as_ref()))
            .collect();

        debug!("installing {} stem exclusion term(s)", set.len());
        *self.terms.write() = Arc::new(set);
    }

    /// Remove every term.
    pub fn clear(&self) {
        self.install(std::iter::empty::<&str>());
    }

    /// Check whether `term` is protected from stemming.
    pub fn contains(&self, term: &str) -> bool {
        let key = self.normalize(term);
        self.terms.read().contains(&key)
    }

    /// Number of protected terms.
    pub fn len(&self) -> usize {
        self.terms.read().len()
    }

    /// Check if nothing is protected.
    pub fn is_empty(&self) -> bool {
        self.terms.read().is_empty()
    }

    /// Sorted copy of the normalized terms currently installed.
    pub fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = self.terms.read().iter().cloned().collect();
        terms.sort();
        terms
    }

    fn normalize(&self, term: &str) -> String {
        self.folder.fold(term).0
    }
}
