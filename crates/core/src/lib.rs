//! Core types and traits for Strata text analysis
//!
//! This crate defines the foundational pieces every analysis stage shares:
//! - Token: text, byte offsets and position increment
//! - TokenStream: the pull-based stage contract
//! - Error: Error type hierarchy
//! - AnalysisConfig: TOML-loadable pipeline configuration
//! - StopWords: locale stop-word lists

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod stopwords;
pub mod stream;
pub mod token;

pub use config::{AnalysisConfig, BoundarySet, GrowthBoundary, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use stopwords::StopWords;
pub use stream::{collect_tokens, PreTokenizedStream, TokenStream};
pub use token::Token;
