//! Strata text analysis
//!
//! Converts raw document and query strings into position-aware token
//! streams and pairs each named pipeline with a relevance scoring policy.
//!
//! # Quick Start
//!
//! ```
//! use strata_text::{analyze_string, AnalysisConfig, AnalyzerRegistry, Similarity};
//!
//! let registry = AnalyzerRegistry::with_defaults(&AnalysisConfig::default()).unwrap();
//!
//! let exact = registry.get_pipeline("exact", Some("title")).unwrap();
//! assert_eq!(analyze_string(&exact, "A-Ha").unwrap(), "a-ha a ha");
//!
//! let sim = registry.similarity("exact").unwrap();
//! assert_eq!(sim.length_norm("title", 12), 1.0);
//! ```
//!
//! # Architecture
//!
//! - `strata-core`: tokens, the stage contract, errors, configuration
//! - `strata-analysis`: segmenters, filters, pipeline composition, presets
//! - `strata-search`: scoring policies and norms
//!
//! This crate adds the registry the indexing and query engines consult.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod registry;

use strata_analysis::PipelineFactory;

pub use registry::{default_policy, AnalyzerRegistry};
pub use strata_analysis::{
    presets, AnalysisResources, AnalysisStream, FilterSpec, PipelineSpec, PipelineToggles,
    PipelineUse, SegmenterSpec,
};
pub use strata_core::{AnalysisConfig, Error, GrowthBoundary, Result, Token, TokenStream};
pub use strata_search::{FieldInvertState, ScoringPolicy, Similarity};

/// Run `text` through `factory` and join the non-empty terms with spaces
pub fn analyze_string(factory: &PipelineFactory, text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    for token in factory.open("", text) {
        let token = token?;
        if token.text.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&token.text);
    }
    Ok(out)
}
