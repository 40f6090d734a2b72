//! Relevance scoring policies for Strata text analysis
//!
//! This crate provides:
//! - Similarity trait for the overridable weight functions
//! - StandardSimilarity, FlatSimilarity and NoLengthSimilarity policies
//! - ScoringPolicy selector
//! - FieldInvertState for index-time norm computation
//!
//! Policies are paired with pipelines: flat for exact categorical matching,
//! no-length for stemmed and type-ahead text, standard for free text.
//!
//! # Usage
//!
//! ```
//! use strata_search::{FieldInvertState, ScoringPolicy};
//!
//! let sim = ScoringPolicy::NoLength.similarity();
//! let state = FieldInvertState { length: 40, num_overlap: 0, boost: 1.0 };
//! assert_eq!(sim.compute_norm("title", &state), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod norms;
pub mod similarity;

// Re-export commonly used types
pub use norms::FieldInvertState;
pub use similarity::{
    FlatSimilarity, NoLengthSimilarity, ScoringPolicy, Similarity, StandardSimilarity,
};
