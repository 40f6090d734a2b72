//! Token-stream analysis for Strata
//!
//! This crate provides:
//! - Segmenters: InlineSegmenter, KeywordSegmenter, GrowthSegmenter
//! - Filters: compound splitting, deduplication, stem-with-original,
//!   alphanumeric re-segmenting, plus the stock normalize, stop-word, stem,
//!   edge n-gram and shingle stages
//! - Stemmer and Normalizer capability traits
//! - PipelineSpec / PipelineFactory for declarative pipeline assembly
//! - Named presets
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use strata_analysis::{presets, AnalysisResources, PipelineFactory};
//! use strata_core::AnalysisConfig;
//!
//! let config = AnalysisConfig::default();
//! let spec = presets::preset(presets::EXACT, &config).unwrap();
//! let factory = PipelineFactory::new(spec, Arc::new(AnalysisResources::new(&config))).unwrap();
//!
//! let terms: Vec<String> = factory
//!     .analyze("A-Ha")
//!     .unwrap()
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(terms, vec!["a-ha", "a", "ha"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod growth;
pub mod normalize;
pub mod pipeline;
pub mod presets;
pub mod segmenter;
pub mod stemmer;

use strata_core::TokenStream;

/// Owned, type-erased pipeline stage
pub type BoxTokenStream = Box<dyn TokenStream>;

// Re-export commonly used types
pub use filter::{
    AlnumSegmentFilter, CompoundSplitFilter, DeduplicateFilter, EdgeNgramFilter, ShingleFilter,
    StemFilter, StemWithOriginalFilter, StopFilter,
};
pub use growth::GrowthSegmenter;
pub use normalize::{LowercaseNormalizer, NormalizeFilter, Normalizer};
pub use pipeline::{
    AnalysisResources, AnalysisStream, FilterSpec, PipelineFactory, PipelineSpec,
    PipelineToggles, PipelineUse, SegmenterSpec,
};
pub use segmenter::{InlineSegmenter, KeywordSegmenter};
pub use stemmer::{PorterStemmer, Stemmer};
