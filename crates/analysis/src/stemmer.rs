//! Stemming capability
//!
//! Stages depend on the [`Stemmer`] trait only; [`PorterStemmer`] wraps the
//! Snowball English (Porter 2) stemmer from `rust_stemmers`.

use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};
use std::borrow::Cow;
use std::fmt;

/// Reduces a word to its stem, or returns it unchanged
pub trait Stemmer: Send + Sync {
    /// Stem `word`; the result may borrow from `word`, including a slice of it
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

/// English Porter stemmer
pub struct PorterStemmer {
    inner: SnowballStemmer,
}

impl PorterStemmer {
    /// Create an English Porter stemmer
    pub fn new() -> Self {
        PorterStemmer {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PorterStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PorterStemmer").finish()
    }
}

impl Stemmer for PorterStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inner.stem(word)
    }

    fn name(&self) -> &str {
        "porter"
    }
}
