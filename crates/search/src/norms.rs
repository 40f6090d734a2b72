//! Per-field statistics for index-time norms

use strata_core::{Result, Token, TokenStream};

/// Token counts gathered while inverting one field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldInvertState {
    /// Tokens in the field
    pub length: u32,
    /// Tokens at position increment 0
    pub num_overlap: u32,
    /// Index-time field boost
    pub boost: f32,
}

impl Default for FieldInvertState {
    fn default() -> Self {
        FieldInvertState {
            length: 0,
            num_overlap: 0,
            boost: 1.0,
        }
    }
}

impl FieldInvertState {
    /// Empty state with `boost`
    pub fn new(boost: f32) -> Self {
        FieldInvertState {
            boost,
            ..Self::default()
        }
    }

    /// Account for one token
    pub fn add_token(&mut self, token: &Token) {
        self.length = self.length.saturating_add(1);
        if token.is_overlap() {
            self.num_overlap = self.num_overlap.saturating_add(1);
        }
    }

    /// Drain `stream` and count its tokens
    pub fn from_tokens<S: TokenStream + ?Sized>(stream: &mut S, boost: f32) -> Result<Self> {
        let mut state = Self::new(boost);
        while let Some(token) = stream.next_token()? {
            state.add_token(&token);
        }
        Ok(state)
    }
}
