//! Reusable analysis pipelines.
//!
//! An [`AnalyzerPipeline`] owns a tokenizer, a filter chain and a handle to
//! the exclusion registry, and is either unbound or bound to one input text.
//! [`reset`](AnalyzerPipeline::reset) rebinds it to new text while keeping
//! everything else, so a caller analyzing many short texts builds the chain
//! once.
//!
//! The pipeline is an [`Iterator`] over the tokens of the bound text. An
//! unbound pipeline yields nothing.
//!
//! # Examples
//!
//! ```
//! use sabia::analysis::analyzer::language::brazilian::BrazilianAnalyzer;
//!
//! let analyzer = BrazilianAnalyzer::new();
//! let mut pipeline = analyzer.pipeline();
//! assert_eq!(pipeline.next(), None);
//!
//! pipeline.reset(Some("boataria")).unwrap();
//! assert_eq!(pipeline.next().unwrap().text, "boat");
//!
//! pipeline.reset(Some("Brasília")).unwrap();
//! assert_eq!(pipeline.next().unwrap().text, "brasil");
//! assert_eq!(pipeline.next(), None);
//!
//! assert!(pipeline.reset(None).is_err());
//! ```

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::exclusion::ExclusionRegistry;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, SabiaError};

enum State {
    Unbound,
    Bound(TokenStream),
}

/// A tokenizer and filter chain that can be rebound to new input.
///
/// The pipeline owns its current token stream and is therefore not `Send`.
/// Build one per thread; the analyzer that produced it and the exclusion
/// registry can be shared.
pub struct AnalyzerPipeline {
    chain: PipelineAnalyzer,
    exclusions: Arc<ExclusionRegistry>,
    state: State,
}

impl AnalyzerPipeline {
    /// Create an unbound pipeline.
    ///
    /// `filters` run in order on every bound text. `exclusions` is the
    /// registry the chain consults, usually through a
    /// [`KeywordMarkerFilter`](crate::analysis::token_filter::keyword_marker::KeywordMarkerFilter)
    /// in `filters`; the pipeline keeps it so terms can be installed through
    /// [`exclusions`](Self::exclusions).
    pub fn new(
        tokenizer: Arc<dyn Tokenizer>,
        filters: Vec<Arc<dyn Filter>>,
        exclusions: Arc<ExclusionRegistry>,
    ) -> Self {
        let chain = filters
            .into_iter()
            .fold(PipelineAnalyzer::new(tokenizer), |chain, filter| {
                chain.add_filter(filter)
            });
        Self::from_analyzer(chain, exclusions)
    }

    /// Create an unbound pipeline from an existing chain.
    pub fn from_analyzer(chain: PipelineAnalyzer, exclusions: Arc<ExclusionRegistry>) -> Self {
        debug!(
            "created analyzer pipeline '{}' with {} filter(s)",
            chain.pipeline_name(),
            chain.filters().len()
        );
        AnalyzerPipeline {
            chain,
            exclusions,
            state: State::Unbound,
        }
    }

    /// Bind the pipeline to `input`, dropping whatever was left of the
    /// previous text.
    ///
    /// Passing `None` is an error and leaves the pipeline as it was.
    pub fn reset(&mut self, input: Option<&str>) -> Result<()> {
        let Some(text) = input else {
            warn!(
                "rejected rebinding analyzer pipeline '{}' without input",
                self.chain.pipeline_name()
            );
            return Err(SabiaError::invalid_argument(
                "analyzer pipeline input must not be absent",
            ));
        };

        let tokens = self.chain.analyze(text)?;
        debug!(
            "rebound analyzer pipeline '{}' to {} byte(s) of input",
            self.chain.pipeline_name(),
            text.len()
        );
        self.state = State::Bound(tokens);
        Ok(())
    }

    /// Check whether input is bound.
    pub fn is_bound(&self) -> bool {
        matches!(self.state, State::Bound(_))
    }

    /// The exclusion registry shared with the filter chain.
    pub fn exclusions(&self) -> &Arc<ExclusionRegistry> {
        &self.exclusions
    }
}

impl Iterator for AnalyzerPipeline {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match &mut self.state {
            State::Bound(tokens) => tokens.next(),
            State::Unbound => None,
        }
    }
}

impl fmt::Debug for AnalyzerPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerPipeline")
            .field("chain", &self.chain)
            .field("exclusions", &self.exclusions.len())
            .field("bound", &self.is_bound())
            .finish()
    }
}
