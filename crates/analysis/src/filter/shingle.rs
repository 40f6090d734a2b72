//! Shingle (word bigram) filter
//!
//! Tokens stacked at one position (increment 0, e.g. compound parts) form a
//! column. Bigrams join every token of a column with every token of the
//! next column; tokens within a column are never joined to each other.
//!
//! ```text
//! min 1: "a b c"  -> a, a_b (+0), b, b_c (+0), c
//! min 2: "a b c"  -> a_b, b_c
//! min 1: "a-ha x" -> a-ha, a (+0), ha (+0), a-ha_x (+0), a_x (+0), ha_x (+0), x
//! ```

use std::collections::VecDeque;
use strata_core::config::MAX_SHINGLES;
use strata_core::{Result, Token, TokenStream};

/// Joins tokens at adjacent positions into bigrams
pub struct ShingleFilter {
    input: Box<dyn TokenStream>,
    emit_unigrams: bool,
    separator: char,
    /// First token of the column after `next_column`
    lookahead: Option<Token>,
    /// Column already read while pairing, emitted next
    next_column: Option<Vec<Token>>,
    pending: VecDeque<Token>,
    exhausted: bool,
}

impl ShingleFilter {
    /// Shingles of `min_shingles..=2` tokens joined by `separator`
    ///
    /// `min_shingles` outside `[1, 2]` is treated as 1.
    pub fn new(input: Box<dyn TokenStream>, min_shingles: usize, separator: char) -> Self {
        let emit_unigrams = !(2..=MAX_SHINGLES).contains(&min_shingles);
        ShingleFilter {
            input,
            emit_unigrams,
            separator,
            lookahead: None,
            next_column: None,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    fn pull(&mut self) -> Result<Option<Token>> {
        if self.exhausted {
            return Ok(None);
        }
        let token = self.input.next_token()?;
        self.exhausted = token.is_none();
        Ok(token)
    }

    /// Reads one position: a token plus the increment-0 tokens after it
    fn read_column(&mut self) -> Result<Vec<Token>> {
        let first = match self.lookahead.take() {
            Some(token) => token,
            None => match self.pull()? {
                Some(token) => token,
                None => return Ok(Vec::new()),
            },
        };
        let mut column = vec![first];
        while let Some(token) = self.pull()? {
            if token.position_increment == 0 {
                column.push(token);
            } else {
                self.lookahead = Some(token);
                break;
            }
        }
        Ok(column)
    }

    fn bigram(&self, left: &Token, right: &Token, position_increment: u32) -> Token {
        let mut text = String::with_capacity(left.text.len() + right.text.len() + 1);
        text.push_str(&left.text);
        text.push(self.separator);
        text.push_str(&right.text);
        Token {
            text,
            start_offset: left.start_offset,
            end_offset: right.end_offset.max(left.start_offset),
            position_increment,
        }
    }

    fn clear(&mut self) {
        self.lookahead = None;
        self.next_column = None;
        self.pending.clear();
        self.exhausted = false;
    }
}

impl TokenStream for ShingleFilter {
    fn next_token(&mut self) -> Result<Option<Token>> {
        while self.pending.is_empty() {
            let left = match self.next_column.take() {
                Some(column) => column,
                None => self.read_column()?,
            };
            if left.is_empty() {
                return Ok(None);
            }
            let right = self.read_column()?;

            // Without unigrams the first bigram carries the column's step
            let mut increment = if self.emit_unigrams {
                0
            } else {
                left[0].position_increment
            };
            let mut bigrams = Vec::with_capacity(left.len() * right.len());
            for l in &left {
                for r in &right {
                    bigrams.push(self.bigram(l, r, increment));
                    increment = 0;
                }
            }
            if self.emit_unigrams {
                self.pending.extend(left);
            }
            self.pending.extend(bigrams);
            if !right.is_empty() {
                self.next_column = Some(right);
            }
        }
        Ok(self.pending.pop_front())
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
        "shingle"
    }
}
