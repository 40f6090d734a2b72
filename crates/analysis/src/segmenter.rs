//! Primitive segmenters
//!
//! - [`InlineSegmenter`]: alphanumeric runs plus configured inline
//!   punctuation, so `"v1.2-beta #4"` yields `v1.2-beta` and `#4`
//! - [`KeywordSegmenter`]: the whole field as one token

use smallvec::SmallVec;
use strata_core::config::{AnalysisConfig, DEFAULT_INLINE_PUNCTUATION, DEFAULT_MAX_TOKEN_CHARS};
use strata_core::{Result, Token, TokenStream};

/// Inline punctuation set; the default has three entries
pub type PunctuationSet = SmallVec<[char; 4]>;

// ============================================================================
// InlineSegmenter
// ============================================================================

/// Character-classifying segmenter
///
/// A character belongs to the current token if it is alphanumeric or one of
/// the inline punctuation characters. Everything else separates tokens.
/// Runs longer than `max_token_chars` are cut into several tokens.
///
/// Malformed input is not an error: anything failing the classification is
/// a separator.
#[derive(Debug, Clone)]
pub struct InlineSegmenter {
    input: String,
    cursor: usize,
    exhausted: bool,
    punctuation: PunctuationSet,
    max_token_chars: usize,
}

impl InlineSegmenter {
    /// Segment `text` with the default punctuation set (`.`, `-`, `#`)
    pub fn new(text: &str) -> Self {
        Self::with_punctuation(text, &DEFAULT_INLINE_PUNCTUATION)
    }

    /// Segment `text` keeping `punctuation` inside tokens
    pub fn with_punctuation(text: &str, punctuation: &[char]) -> Self {
        InlineSegmenter {
            input: text.to_string(),
            cursor: 0,
            exhausted: false,
            punctuation: punctuation.iter().copied().collect(),
            max_token_chars: DEFAULT_MAX_TOKEN_CHARS,
        }
    }

    /// Segment `text` using the punctuation and length limit from `config`
    pub fn from_config(text: &str, config: &AnalysisConfig) -> Self {
        Self::with_punctuation(text, &config.inline_punctuation)
            .with_max_token_chars(config.max_token_chars)
    }

    /// Builder: cap token length in characters (0 keeps the default)
    pub fn with_max_token_chars(mut self, max: usize) -> Self {
        if max > 0 {
            self.max_token_chars = max;
        }
        self
    }

    #[inline]
    fn is_token_char(&self, c: char) -> bool {
        c.is_alphanumeric() || self.punctuation.contains(&c)
    }
}

impl TokenStream for InlineSegmenter {
    fn next_token(&mut self) -> Result<Option<Token>> {
        let base = self.cursor;
        let rest = &self.input[base..];
        let mut start = None;
        let mut end = 0;
        let mut chars = 0;
        let mut consumed = rest.len();

        for (i, c) in rest.char_indices() {
            if self.is_token_char(c) {
                if start.is_none() {
                    start = Some(i);
                }
                end = i + c.len_utf8();
                chars += 1;
                if chars == self.max_token_chars {
                    consumed = end;
                    break;
                }
            } else if start.is_some() {
                consumed = i + c.len_utf8();
                break;
            }
        }

        let token = start.map(|s| Token::new(&rest[s..end], base + s, base + end));
        self.cursor = base + consumed;
        if token.is_none() {
            self.exhausted = true;
        }
        Ok(token)
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.exhausted = false;
    }

    fn reopen(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
        self.reset();
    }

    fn finalize_offsets(&mut self) -> Option<usize> {
        self.exhausted.then_some(self.input.len())
    }

    fn close(&mut self) {
        self.input = String::new();
        self.reset();
    }

    fn name(&self) -> &'static str {
        "inline"
    }
}

// ============================================================================
// KeywordSegmenter
// ============================================================================

/// Emits the whole field as a single token
///
/// Empty input yields no token.
#[derive(Debug, Clone)]
pub struct KeywordSegmenter {
    input: String,
    emitted: bool,
}

impl KeywordSegmenter {
    /// Wrap `text` as one token
    pub fn new(text: &str) -> Self {
        KeywordSegmenter {
            input: text.to_string(),
            emitted: false,
        }
    }
}

impl TokenStream for KeywordSegmenter {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if self.emitted || self.input.is_empty() {
            self.emitted = true;
            return Ok(None);
        }
        self.emitted = true;
        Ok(Some(Token::new(self.input.as_str(), 0, self.input.len())))
    }

    fn reset(&mut self) {
        self.emitted = false;
    }

    fn reopen(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
        self.reset();
    }

    fn finalize_offsets(&mut self) -> Option<usize> {
        self.emitted.then_some(self.input.len())
    }

    fn close(&mut self) {
        self.input = String::new();
        self.reset();
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
