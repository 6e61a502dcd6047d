//! Brazilian Portuguese analyzer.
//!
//! Text is split on Unicode word boundaries, lowercased, cleared of stop
//! words, checked against the stem exclusion table and finally stemmed:
//!
//! ```text
//! UnicodeWordTokenizer → LowercaseFilter → StopFilter → KeywordMarkerFilter → StemFilter
//! ```
//!
//! Terms in the exclusion table come out lowercased with their diacritics
//! intact. Every other term is folded and, if it is a plain word, stemmed.
//!
//! # Examples
//!
//! ```
//! use sabia::analysis::analyzer::analyzer::Analyzer;
//! use sabia::analysis::analyzer::language::brazilian::BrazilianAnalyzer;
//!
//! let analyzer = BrazilianAnalyzer::new();
//! let terms: Vec<String> = analyzer
//!     .analyze("Quintessência")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(terms, vec!["quintessente"]);
//!
//! analyzer.set_stem_exclusion_table(["quintessência"]);
//! let terms: Vec<String> = analyzer
//!     .analyze("Quintessência")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(terms, vec!["quintessência"]);
//! ```

use std::fmt::{Debug, Formatter};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::analyzer::reusable::AnalyzerPipeline;
use crate::analysis::exclusion::ExclusionRegistry;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::keyword_marker::KeywordMarkerFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::{BrazilianStemmer, StemFilter};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::analysis::version::Version;
use crate::error::Result;

/// Configuration for [`BrazilianAnalyzer`].
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use sabia::analysis::analyzer::language::brazilian::BrazilianAnalyzerConfig;
/// use sabia::analysis::version::Version;
///
/// let config = BrazilianAnalyzerConfig::from_json_str(
///     r#"{"version": "2.4", "stem_exclusions": ["quintessência"]}"#,
/// ).unwrap();
///
/// assert_eq!(config.version, Version::V2_4);
/// assert!(config.enable_stop_words);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrazilianAnalyzerConfig {
    /// Release whose behavior the analyzer reproduces.
    pub version: Version,
    /// Custom stop words. `None` uses the built-in Brazilian list.
    pub stop_words: Option<Vec<String>>,
    /// Whether stop words are removed at all.
    pub enable_stop_words: bool,
    /// Terms installed in the exclusion table at construction.
    pub stem_exclusions: Vec<String>,
}

impl Default for BrazilianAnalyzerConfig {
    fn default() -> Self {
        BrazilianAnalyzerConfig {
            version: Version::CURRENT,
            stop_words: None,
            enable_stop_words: true,
            stem_exclusions: Vec::new(),
        }
    }
}

impl BrazilianAnalyzerConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Analyzer for Brazilian Portuguese text.
///
/// The analyzer is `Send + Sync` and can be shared across threads. Its
/// exclusion table is shared with every stream it has produced, so
/// [`set_stem_exclusion_table`](Self::set_stem_exclusion_table) also affects
/// streams that are already open.
pub struct BrazilianAnalyzer {
    inner: PipelineAnalyzer,
    exclusions: Arc<ExclusionRegistry>,
    version: Version,
}

impl BrazilianAnalyzer {
    /// Create an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BrazilianAnalyzerConfig::default())
    }

    /// Create an analyzer from a configuration.
    pub fn with_config(config: BrazilianAnalyzerConfig) -> Self {
        let exclusions = Arc::new(ExclusionRegistry::from_terms(&config.stem_exclusions));
        Self::with_registry(config, exclusions)
    }

    /// Create an analyzer that consults a registry owned by the caller.
    ///
    /// `config.stem_exclusions`, when not empty, replaces the registry's
    /// current contents.
    pub fn with_registry(
        config: BrazilianAnalyzerConfig,
        exclusions: Arc<ExclusionRegistry>,
    ) -> Self {
        if !config.stem_exclusions.is_empty() {
            exclusions.install(&config.stem_exclusions);
        }

        let mut inner = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()));

        if config.enable_stop_words {
            let stop_filter = match config.stop_words {
                Some(words) => StopFilter::with_stop_words(words.into_iter().collect()),
                None => StopFilter::new(),
            };
            inner = inner.add_filter(Arc::new(stop_filter.with_version(config.version)));
        }

        let inner = inner
            .add_filter(Arc::new(KeywordMarkerFilter::new(Arc::clone(&exclusions))))
            .add_filter(Arc::new(StemFilter::with_stemmer(Arc::new(
                BrazilianStemmer::new(),
            ))))
            .with_name("brazilian");

        debug!(
            "created brazilian analyzer (version {}, {} stem exclusion(s))",
            config.version,
            exclusions.len()
        );

        BrazilianAnalyzer {
            inner,
            exclusions,
            version: config.version,
        }
    }

    /// Replace the stem exclusion table.
    ///
    /// Streams already handed out see the new table from their next token on.
    pub fn set_stem_exclusion_table<I, S>(&self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclusions.install(terms);
    }

    /// The shared exclusion registry.
    pub fn exclusions(&self) -> &Arc<ExclusionRegistry> {
        &self.exclusions
    }

    /// The version this analyzer reproduces.
    pub fn version(&self) -> Version {
        self.version
    }

    /// The underlying tokenizer and filter chain.
    pub fn pipeline_analyzer(&self) -> &PipelineAnalyzer {
        &self.inner
    }

    /// Build a fresh pipeline with no input bound.
    ///
    /// Bind input with [`AnalyzerPipeline::reset`]; the same pipeline can then
    /// be rebound for every subsequent text.
    pub fn pipeline(&self) -> AnalyzerPipeline {
        AnalyzerPipeline::from_analyzer(self.inner.clone(), Arc::clone(&self.exclusions))
    }

    /// Build a fresh pipeline bound to `text`.
    pub fn token_stream(&self, text: &str) -> Result<AnalyzerPipeline> {
        let mut pipeline = self.pipeline();
        pipeline.reset(Some(text))?;
        Ok(pipeline)
    }
}

impl Default for BrazilianAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for BrazilianAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.token_stream(text)?))
    }

    fn name(&self) -> &'static str {
        "brazilian"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Debug for BrazilianAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrazilianAnalyzer")
            .field("inner", &self.inner)
            .field("exclusions", &self.exclusions.len())
            .field("version", &self.version)
            .finish()
    }
}
