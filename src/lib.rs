//! # Sabia
//!
//! Brazilian Portuguese text analysis for search indexing.
//!
//! ## Features
//!
//! - Diacritic folding that leaves one- and two-letter words alone
//! - A rule-table suffix stemmer for Brazilian Portuguese
//! - A stem exclusion table that can be replaced while analyzers are in use
//! - Reusable analyzer pipelines that rebind to new text without rebuilding
//!
//! ## Example
//!
//! ```
//! use sabia::prelude::*;
//!
//! let analyzer = BrazilianAnalyzer::new();
//! let terms: Vec<String> = analyzer
//!     .analyze("As boatarias de Brasília")
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(terms, vec!["boat", "brasil"]);
//! ```

pub mod analysis;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, AnalyzerPipeline, BrazilianAnalyzer};
    pub use crate::analysis::exclusion::ExclusionRegistry;
    pub use crate::analysis::token::Token;
    pub use crate::analysis::version::Version;
    pub use crate::error::{Result, SabiaError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
