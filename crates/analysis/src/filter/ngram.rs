//! Front edge n-gram filter for type-ahead pipelines
//!
//! ```text
//! "quick" (min 1, max 3) -> "q" (+1), "qu" (+0), "qui" (+0)
//! ```
//!
//! Gram sizes count characters, not bytes.

use strata_core::{Result, Token, TokenStream};

/// Emits leading prefixes of every token
pub struct EdgeNgramFilter {
    input: Box<dyn TokenStream>,
    min_gram: usize,
    max_gram: usize,
    current: Option<Token>,
    /// Byte length of each gram still to emit for `current`
    gram_ends: Vec<usize>,
    next_gram: usize,
}

impl EdgeNgramFilter {
    /// Prefixes of `min_gram..=max_gram` characters
    ///
    /// `min_gram` of 0 is treated as 1 and `max_gram` below `min_gram` as
    /// `min_gram`.
    pub fn new(input: Box<dyn TokenStream>, min_gram: usize, max_gram: usize) -> Self {
        let min_gram = min_gram.max(1);
        EdgeNgramFilter {
            input,
            min_gram,
            max_gram: max_gram.max(min_gram),
            current: None,
            gram_ends: Vec::new(),
            next_gram: 0,
        }
    }

    fn load(&mut self, token: &Token) {
        self.gram_ends.clear();
        self.next_gram = 0;
        let ends = token
            .text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .enumerate()
            .map(|(n, end)| (n + 1, end));
        for (chars, end) in ends {
            if chars > self.max_gram {
                break;
            }
            if chars >= self.min_gram {
                self.gram_ends.push(end);
            }
        }
    }

    fn clear(&mut self) {
        self.current = None;
        self.gram_ends.clear();
        self.next_gram = 0;
    }
}

impl TokenStream for EdgeNgramFilter {
    fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            if let Some(token) = &self.current {
                if let Some(&end) = self.gram_ends.get(self.next_gram) {
                    let (start_offset, end_offset) = token.sub_span(0, end);
                    let position_increment = if self.next_gram == 0 {
                        token.position_increment
                    } else {
                        0
                    };
                    self.next_gram += 1;
                    return Ok(Some(Token {
                        text: token.text[..end].to_string(),
                        start_offset,
                        end_offset,
                        position_increment,
                    }));
                }
            }

            let Some(token) = self.input.next_token()? else {
                self.clear();
                return Ok(None);
            };
            self.load(&token);
            self.current = Some(token);
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
        "edge_ngram"
    }
}
