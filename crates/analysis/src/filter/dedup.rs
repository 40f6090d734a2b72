//! Deduplicating filter for highlighting
//!
//! Collapses tokens sharing a start offset and text into the first one
//! seen, extending its end offset to the duplicate's. Highlighters then get
//! a single span per term and start position.
//!
//! # Two phases
//!
//! 1. Materialize: pull the whole upstream stream, merging as it goes
//! 2. Replay: hand out the survivors in insertion order
//!
//! Nothing is emitted before upstream is exhausted, so memory is bounded by
//! the field size. An upstream error aborts materialization and the partial
//! collection is dropped; the filter then reports end-of-stream until it is
//! reset or reopened.

use rustc_hash::FxHashMap;
use std::vec;
use strata_core::{Result, Token, TokenStream};
use tracing::warn;

/// Removes duplicate tokens at the same start offset
pub struct DeduplicateFilter {
    input: Box<dyn TokenStream>,
    replay: Option<vec::IntoIter<Token>>,
    aborted: bool,
}

impl DeduplicateFilter {
    /// Deduplicate tokens from `input`
    pub fn new(input: Box<dyn TokenStream>) -> Self {
        DeduplicateFilter {
            input,
            replay: None,
            aborted: false,
        }
    }

    fn materialize(&mut self) -> Result<Vec<Token>> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut index: FxHashMap<(usize, String), usize> = FxHashMap::default();

        loop {
            let token = match self.input.next_token() {
                Ok(Some(token)) => token,
                Ok(None) => break,
                Err(e) => {
                    warn!(
                        stage = self.input.name(),
                        buffered = tokens.len(),
                        error = %e,
                        "Upstream failed while deduplicating, dropping buffered tokens"
                    );
                    return Err(e);
                }
            };

            let key = (token.start_offset, token.text.clone());
            match index.get(&key) {
                Some(&existing) => tokens[existing].end_offset = token.end_offset,
                None => {
                    index.insert(key, tokens.len());
                    tokens.push(token);
                }
            }
        }
        Ok(tokens)
    }
}

impl TokenStream for DeduplicateFilter {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if self.aborted {
            return Ok(None);
        }
        if self.replay.is_none() {
            match self.materialize() {
                Ok(tokens) => self.replay = Some(tokens.into_iter()),
                Err(e) => {
                    self.aborted = true;
                    return Err(e);
                }
            }
        }
        let next = self.replay.as_mut().and_then(Iterator::next);
        if next.is_none() {
            self.replay = None;
        }
        Ok(next)
    }

    fn reset(&mut self) {
        self.replay = None;
        self.aborted = false;
        self.input.reset();
    }

    fn reopen(&mut self, text: &str) {
        self.replay = None;
        self.aborted = false;
        self.input.reopen(text);
    }

    fn finalize_offsets(&mut self) -> Option<usize> {
        self.input.finalize_offsets()
    }

    fn close(&mut self) {
        self.replay = None;
        self.aborted = false;
        self.input.close();
    }

    fn name(&self) -> &'static str {
        "deduplicate"
    }
}
