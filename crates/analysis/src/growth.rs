//! Prefix-growth segmenter
//!
//! Emits ever longer prefixes of the field, one character at a time, so
//! every partial input a user may have typed is searchable on its own:
//!
//! ```text
//! "new yo" -> "n", "ne", "new", "new y", "new yo"
//! ```
//!
//! A prefix ending in a boundary character (whitespace by default) is held
//! back and growth continues past it. Every token spans `0..prefix_len`.

use strata_core::{AnalysisConfig, BoundarySet, GrowthBoundary, Result, Token, TokenStream};

/// Segmenter producing a nondecreasing sequence of prefixes
#[derive(Debug, Clone)]
pub struct GrowthSegmenter {
    input: String,
    cursor: usize,
    done: bool,
    boundary: BoundarySet,
}

impl GrowthSegmenter {
    /// Grow over `text`, withholding prefixes that end in whitespace
    pub fn new(text: &str) -> Self {
        Self::with_boundary(text, GrowthBoundary::Whitespace.resolve(&[]))
    }

    /// Grow over `text` with an explicit boundary set
    pub fn with_boundary(text: &str, boundary: BoundarySet) -> Self {
        GrowthSegmenter {
            input: text.to_string(),
            cursor: 0,
            done: false,
            boundary,
        }
    }

    /// Grow over `text` using the boundary from `config`
    pub fn from_config(text: &str, config: &AnalysisConfig) -> Self {
        let boundary = config.growth_boundary.resolve(&config.inline_punctuation);
        Self::with_boundary(text, boundary)
    }
}

impl TokenStream for GrowthSegmenter {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if self.done {
            return Ok(None);
        }
        while let Some(c) = self.input[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
            if !self.boundary.contains(c) {
                let prefix = &self.input[..self.cursor];
                return Ok(Some(Token::new(prefix, 0, self.cursor)));
            }
        }
        self.done = true;
        Ok(None)
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.done = false;
    }

    fn reopen(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
        self.reset();
    }

    /// The last emitted prefix may stop short of trailing boundary
    /// characters; once input is exhausted the final offset covers them.
    fn finalize_offsets(&mut self) -> Option<usize> {
        self.done.then_some(self.cursor)
    }

    fn close(&mut self) {
        self.input = String::new();
        self.reset();
    }

    fn name(&self) -> &'static str {
        "growth"
    }
}
