//! Token: the unit of analyzed text
//!
//! A token carries its text, the byte span it came from in the field text,
//! and its position increment relative to the previous token.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit of analyzed text
///
/// Offsets are byte offsets into the original field text, inclusive start,
/// exclusive end. Tokens are handed out by value, so nothing a caller keeps
/// aliases a stage's internal buffers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Term text
    pub text: String,
    /// Byte offset of the first character in the field text
    pub start_offset: usize,
    /// Byte offset one past the last character in the field text
    pub end_offset: usize,
    /// Distance in query positions from the previous token (0 = same position)
    pub position_increment: u32,
}

impl Token {
    /// Create a token with the standard position increment of 1
    pub fn new(text: impl Into<String>, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text: text.into(),
            start_offset,
            end_offset: end_offset.max(start_offset),
            position_increment: 1,
        }
    }

    /// Builder: set the position increment
    pub fn with_position_increment(mut self, increment: u32) -> Self {
        self.position_increment = increment;
        self
    }

    /// Clone this token with new text, keeping offsets and increment
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            start_offset: self.start_offset,
            end_offset: self.end_offset,
            position_increment: self.position_increment,
        }
    }

    /// True when this token shares the previous token's position
    pub fn is_overlap(&self) -> bool {
        self.position_increment == 0
    }

    /// Length of the covered span in bytes
    pub fn span_len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }

    /// Map a byte range inside `text` back onto the field text.
    ///
    /// The result is clamped to this token's span, so it stays sound even
    /// when an upstream stage changed the text length (case or accent
    /// folding).
    pub fn sub_span(&self, from: usize, to: usize) -> (usize, usize) {
        let start = (self.start_offset + from).min(self.end_offset);
        let end = (self.start_offset + to).clamp(start, self.end_offset);
        (start, end)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}..{}]+{}",
            self.text, self.start_offset, self.end_offset, self.position_increment
        )
    }
}
