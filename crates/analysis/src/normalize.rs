//! Normalization stage
//!
//! Case and accent folding are host capabilities behind [`Normalizer`].
//! The stock [`LowercaseNormalizer`] only lower-cases; hosts that need
//! accent folding plug in their own implementation.

use std::borrow::Cow;
use std::sync::Arc;
use strata_core::{Result, Token, TokenStream};

/// Text normalization capability
pub trait Normalizer: Send + Sync {
    /// Normalize `text`; the result may borrow from `text`, including a slice of it
    fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Unicode lower-casing
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseNormalizer;

impl Normalizer for LowercaseNormalizer {
    fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.chars().any(char::is_uppercase) {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Applies a [`Normalizer`] to every token
///
/// Offsets and position increments pass through. Tokens that normalize to
/// nothing are dropped.
pub struct NormalizeFilter {
    input: Box<dyn TokenStream>,
    normalizer: Arc<dyn Normalizer>,
}

impl NormalizeFilter {
    /// Normalize tokens from `input`
    pub fn new(input: Box<dyn TokenStream>, normalizer: Arc<dyn Normalizer>) -> Self {
        NormalizeFilter { input, normalizer }
    }

    /// Lower-case tokens from `input`
    pub fn lowercase(input: Box<dyn TokenStream>) -> Self {
        Self::new(input, Arc::new(LowercaseNormalizer))
    }
}

impl TokenStream for NormalizeFilter {
    fn next_token(&mut self) -> Result<Option<Token>> {
        while let Some(mut token) = self.input.next_token()? {
            let normalized = self.normalizer.normalize(&token.text);
            if normalized != token.text {
                token.text = normalized.into_owned();
            }
            if !token.text.is_empty() {
                return Ok(Some(token));
            }
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
        "normalize"
    }
}
