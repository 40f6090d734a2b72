//! Stage contract for pull-based token streams
//!
//! Every segmenter and filter implements [`TokenStream`]. The consumer pulls
//! from the head of the chain; each stage pulls from its upstream on demand
//! and does at most one unit of work per call.
//!
//! ```text
//! Segmenter → Filter → Filter → ... → consumer
//! ```
//!
//! A stage instance belongs to one document at a time. `reset` rewinds the
//! whole chain over the same input; `reopen` installs the next document's
//! text. Both restore every stage to its initial state.

use crate::error::Result;
use crate::token::Token;

/// Pull-based token producer
///
/// Instances are `Send` so a pipeline can move to a worker thread, but they
/// are never shared between threads.
pub trait TokenStream: Send {
    /// Produce the next token, `Ok(None)` at end of stream.
    ///
    /// Filters propagate upstream errors unchanged.
    fn next_token(&mut self) -> Result<Option<Token>>;

    /// Rewind to the start of the current input and clear all buffered state
    fn reset(&mut self);

    /// Clear all buffered state and install `text` as the new input
    fn reopen(&mut self, text: &str);

    /// Final end offset once the input is exhausted.
    ///
    /// Returns `None` while input remains. Filters delegate to their
    /// upstream.
    fn finalize_offsets(&mut self) -> Option<usize>;

    /// Release buffered state and input (end-of-document signal)
    fn close(&mut self);

    /// Stage name for logging
    fn name(&self) -> &'static str;
}

impl<S: TokenStream + ?Sized> TokenStream for Box<S> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        (**self).next_token()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn reopen(&mut self, text: &str) {
        (**self).reopen(text)
    }

    fn finalize_offsets(&mut self) -> Option<usize> {
        (**self).finalize_offsets()
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Drain a stream into a vector, stopping at the first error
pub fn collect_tokens<S: TokenStream + ?Sized>(stream: &mut S) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    while let Some(token) = stream.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// Stream over tokens produced elsewhere
///
/// Lets a host feed its own segmentation into the filter stages. There is
/// no text to re-read, so `reopen` only rewinds.
#[derive(Debug, Clone, Default)]
pub struct PreTokenizedStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl PreTokenizedStream {
    /// Create a stream replaying `tokens` in order
    pub fn new(tokens: Vec<Token>) -> Self {
        PreTokenizedStream { tokens, cursor: 0 }
    }
}

impl TokenStream for PreTokenizedStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        Ok(token)
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn reopen(&mut self, _text: &str) {
        self.cursor = 0;
    }

    fn finalize_offsets(&mut self) -> Option<usize> {
        if self.cursor < self.tokens.len() {
            return None;
        }
        Some(self.tokens.iter().map(|t| t.end_offset).max().unwrap_or(0))
    }

    fn close(&mut self) {
        self.tokens.clear();
        self.cursor = 0;
    }

    fn name(&self) -> &'static str {
        "pre-tokenized"
    }
}
