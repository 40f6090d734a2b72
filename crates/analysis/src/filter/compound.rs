//! Compound-splitting filter
//!
//! Treats split characters inside a token as soft separators: the whole
//! token is emitted first, then every sub-run between split characters at
//! the same position (increment 0).
//!
//! ```text
//! "A-Ha" -> "A-Ha" (+1), "A" (+0), "Ha" (+0)
//! ```

use smallvec::SmallVec;
use std::collections::VecDeque;
use strata_core::config::DEFAULT_INLINE_PUNCTUATION;
use strata_core::{Result, Token, TokenStream};

/// Sub-run queued for emission after its parent token
#[derive(Debug, Clone, PartialEq, Eq)]
struct SavedSubToken {
    text: String,
    /// Byte range inside the parent token's text
    from: usize,
    to: usize,
}

/// Attributes of the parent token, captured once per split token and read
/// for every queued sub-run
#[derive(Debug, Clone, PartialEq, Eq)]
struct CapturedContext {
    parent: Token,
}

impl CapturedContext {
    fn replay(&self, saved: SavedSubToken) -> Token {
        let (start_offset, end_offset) = self.parent.sub_span(saved.from, saved.to);
        Token {
            text: saved.text,
            start_offset,
            end_offset,
            position_increment: 0,
        }
    }
}

/// Emits a token followed by its split-character-delimited parts
pub struct CompoundSplitFilter {
    input: Box<dyn TokenStream>,
    split_chars: SmallVec<[char; 4]>,
    queue: VecDeque<SavedSubToken>,
    captured: Option<CapturedContext>,
}

impl CompoundSplitFilter {
    /// Split on the default characters (`.`, `-`, `#`)
    pub fn new(input: Box<dyn TokenStream>) -> Self {
        Self::with_split_chars(input, &DEFAULT_INLINE_PUNCTUATION)
    }

    /// Split on `split_chars`
    pub fn with_split_chars(input: Box<dyn TokenStream>, split_chars: &[char]) -> Self {
        CompoundSplitFilter {
            input,
            split_chars: split_chars.iter().copied().collect(),
            queue: VecDeque::new(),
            captured: None,
        }
    }

    #[inline]
    fn is_split(&self, c: char) -> bool {
        self.split_chars.contains(&c)
    }

    fn only_split_chars(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| self.is_split(c))
    }

    /// Queue every sub-run of `text` except one equal to the whole token
    fn enqueue_parts(&mut self, text: &str) {
        let mut run_start: Option<usize> = None;
        for (i, c) in text.char_indices() {
            if self.is_split(c) {
                if let Some(start) = run_start.take() {
                    self.queue.push_back(SavedSubToken {
                        text: text[start..i].to_string(),
                        from: start,
                        to: i,
                    });
                }
            } else if run_start.is_none() {
                run_start = Some(i);
            }
        }
        // A trailing run starting at 0 is the whole token
        if let Some(start) = run_start.filter(|&s| s > 0) {
            self.queue.push_back(SavedSubToken {
                text: text[start..].to_string(),
                from: start,
                to: text.len(),
            });
        }
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.captured = None;
    }
}

impl TokenStream for CompoundSplitFilter {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(saved) = self.queue.pop_front() {
            if let Some(context) = &self.captured {
                return Ok(Some(context.replay(saved)));
            }
        }
        self.clear();

        let token = loop {
            match self.input.next_token()? {
                Some(t) if self.only_split_chars(&t.text) => continue,
                Some(t) => break t,
                None => return Ok(None),
            }
        };

        self.enqueue_parts(&token.text);
        if !self.queue.is_empty() {
            self.captured = Some(CapturedContext {
                parent: token.clone(),
            });
        }
        Ok(Some(token))
    }

    fn reset(&mut self) {
        self.clear();
        self.input.reset();
    }

    fn reopen(&mut self, text: &str) {
        self.clear();
        self.input.reopen(text);
    }

    fn finalize_offsets(&mut self) -> Option<usize> {
        self.input.finalize_offsets()
    }

    fn close(&mut self) {
        self.clear();
        self.input.close();
    }

    fn name(&self) -> &'static str {
        "compound_split"
    }
}
