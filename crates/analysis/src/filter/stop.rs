//! Stop-word filter

use rustc_hash::FxHashSet;
use std::sync::Arc;
use strata_core::{Result, StopWords, Token, TokenStream};

/// Shared stop-word lookup set
pub type StopSet = Arc<FxHashSet<String>>;

/// Build a lookup set from every locale in `words`
pub fn stop_set(words: &StopWords) -> StopSet {
    Arc::new(words.iter().map(str::to_string).collect())
}

/// Drops tokens found in a stop set
///
/// With `preserve_positions`, the increments of dropped tokens are added to
/// the next emitted token so phrase distances still see the gap.
pub struct StopFilter {
    input: Box<dyn TokenStream>,
    stop_words: StopSet,
    preserve_positions: bool,
}

impl StopFilter {
    /// Filter `input` against `stop_words`, collapsing gaps
    pub fn new(input: Box<dyn TokenStream>, stop_words: StopSet) -> Self {
        StopFilter {
            input,
            stop_words,
            preserve_positions: false,
        }
    }

    /// Carry removed tokens' increments onto the next token
    pub fn preserve_positions(mut self, preserve: bool) -> Self {
        self.preserve_positions = preserve;
        self
    }
}

impl TokenStream for StopFilter {
    fn next_token(&mut self) -> Result<Option<Token>> {
        let mut skipped: u32 = 0;
        while let Some(mut token) = self.input.next_token()? {
            if self.stop_words.contains(token.text.as_str()) {
                skipped = skipped.saturating_add(token.position_increment);
                continue;
            }
            if self.preserve_positions {
                token.position_increment = token.position_increment.saturating_add(skipped);
            }
            return Ok(Some(token));
        }
        Ok(None)
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
        "stop_words"
    }
}
