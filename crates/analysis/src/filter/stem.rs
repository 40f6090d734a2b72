//! Stemming filters
//!
//! - [`StemFilter`]: replaces each token by its stem (index and query use)
//! - [`StemWithOriginalFilter`]: emits the stem and then the original form
//!
//! `StemWithOriginalFilter` produces two tokens for one input. It exists for
//! highlighting only; putting both forms into an index as separate postings
//! would skew positions and term statistics. `PipelineSpec::validate`
//! rejects it outside highlight pipelines.

use std::sync::Arc;
use strata_core::{Result, Token, TokenStream};

use crate::stemmer::Stemmer;

// ============================================================================
// StemFilter
// ============================================================================

/// One stemmed token per input token
pub struct StemFilter {
    input: Box<dyn TokenStream>,
    stemmer: Arc<dyn Stemmer>,
}

impl StemFilter {
    /// Stem tokens from `input`
    pub fn new(input: Box<dyn TokenStream>, stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { input, stemmer }
    }
}

impl TokenStream for StemFilter {
    fn next_token(&mut self) -> Result<Option<Token>> {
        let Some(mut token) = self.input.next_token()? else {
            return Ok(None);
        };
        let stemmed = self.stemmer.stem(&token.text);
        if stemmed != token.text {
            token.text = stemmed.into_owned();
        }
        Ok(Some(token))
    }

    fn reset(&mut self) {
        self.input.reset();
    }

    fn reopen(&mut self, text: &str) {
        self.input.reopen(text);
    }

    fn finalize_offsets(&mut self) -> Option<usize> {
        self.input.finalize_offsets()
    }

    fn close(&mut self) {
        self.input.close();
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

// ============================================================================
// StemWithOriginalFilter
// ============================================================================

/// Emits the stem, then the unstemmed original when it differs
///
/// The original keeps the token's offsets and sits at the same position
/// (increment 0). Tokens the stemmer leaves unchanged are emitted once.
pub struct StemWithOriginalFilter {
    input: Box<dyn TokenStream>,
    stemmer: Arc<dyn Stemmer>,
    pending_original: Option<Token>,
}

impl StemWithOriginalFilter {
    /// Stem tokens from `input`, keeping originals
    pub fn new(input: Box<dyn TokenStream>, stemmer: Arc<dyn Stemmer>) -> Self {
        StemWithOriginalFilter {
            input,
            stemmer,
            pending_original: None,
        }
    }
}

impl TokenStream for StemWithOriginalFilter {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(original) = self.pending_original.take() {
            return Ok(Some(original));
        }

        let Some(token) = self.input.next_token()? else {
            return Ok(None);
        };
        let stemmed = self.stemmer.stem(&token.text);
        if stemmed == token.text {
            return Ok(Some(token));
        }
        let stem_token = token.with_text(stemmed.into_owned());
        // Original shares the stem's position; one increment per source word
        self.pending_original = Some(token.with_position_increment(0));
        Ok(Some(stem_token))
    }

    fn reset(&mut self) {
        self.pending_original = None;
        self.input.reset();
    }

    fn reopen(&mut self, text: &str) {
        self.pending_original = None;
        self.input.reopen(text);
    }

    fn finalize_offsets(&mut self) -> Option<usize> {
        self.input.finalize_offsets()
    }

    fn close(&mut self) {
        self.pending_original = None;
        self.input.close();
    }

    fn name(&self) -> &'static str {
        "stem_with_original"
    }
}
