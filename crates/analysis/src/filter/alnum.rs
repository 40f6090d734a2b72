//! Alphanumeric re-segmenting filter
//!
//! Splits each upstream token into maximal letter/digit runs, dropping the
//! non-alphanumeric characters around and between them. A part already
//! emitted by this instance is suppressed (exact, case-sensitive match).
//!
//! The seen-set lives as long as the instance's current document: `reset`,
//! `reopen` and `close` clear it. It is not shared across the values of a
//! multi-valued field analyzed through separate streams.

use rustc_hash::FxHashSet;
use strata_core::{Result, Token, TokenStream};

/// Byte range of the next alphanumeric run at or after `from`
fn next_alnum_run(text: &str, from: usize) -> Option<(usize, usize)> {
    let rest = &text[from..];
    let start = rest.find(char::is_alphanumeric)?;
    let len = rest[start..]
        .find(|c: char| !c.is_alphanumeric())
        .unwrap_or(rest.len() - start);
    Some((from + start, from + start + len))
}

/// Emits the unique alphanumeric parts of each token
pub struct AlnumSegmentFilter {
    input: Box<dyn TokenStream>,
    current: Option<Token>,
    cursor: usize,
    first_part: bool,
    seen: FxHashSet<String>,
}

impl AlnumSegmentFilter {
    /// Re-segment tokens from `input`
    pub fn new(input: Box<dyn TokenStream>) -> Self {
        AlnumSegmentFilter {
            input,
            current: None,
            cursor: 0,
            first_part: true,
            seen: FxHashSet::default(),
        }
    }

    fn clear(&mut self) {
        self.current = None;
        self.cursor = 0;
        self.first_part = true;
        self.seen.clear();
    }
}

impl TokenStream for AlnumSegmentFilter {
    fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            let token = match self.current.take() {
                Some(token) => token,
                None => match self.input.next_token()? {
                    Some(token) => {
                        self.cursor = 0;
                        self.first_part = true;
                        token
                    }
                    None => return Ok(None),
                },
            };

            // Buffer exhausted: drop the token and pull the next one
            let Some((from, to)) = next_alnum_run(&token.text, self.cursor) else {
                continue;
            };
            self.cursor = to;

            let part = &token.text[from..to];
            if self.seen.contains(part) {
                self.current = Some(token);
                continue;
            }
            self.seen.insert(part.to_string());

            let (start_offset, end_offset) = token.sub_span(from, to);
            let position_increment = if self.first_part {
                token.position_increment
            } else {
                1
            };
            let out = Token {
                text: part.to_string(),
                start_offset,
                end_offset,
                position_increment,
            };
            self.first_part = false;
            self.current = Some(token);
            return Ok(Some(out));
        }
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
        "alnum_segment"
    }
}
