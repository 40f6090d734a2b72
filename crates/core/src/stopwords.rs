//! Stop-word lists
//!
//! Short function words carry little discriminative value and can be
//! filtered before stemming. The lists are plain configuration data handed
//! to pipeline construction; nothing here is process-wide state.

use serde::{Deserialize, Serialize};

/// English stop words (Lucene's default set)
pub const ENGLISH: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Dutch stop words
pub const DUTCH: &[&str] = &[
    "van", "aan", "dat", "de", "den", "der", "des", "deze", "die", "dit", "door", "een", "het",
    "ik", "is", "je", "na",
];

/// French stop words
pub const FRENCH: &[&str] = &["au", "aux", "la", "le", "les"];

/// Locale-specific stop-word lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopWords {
    /// English function words
    #[serde(default = "default_english")]
    pub english: Vec<String>,
    /// Dutch function words
    #[serde(default = "default_dutch")]
    pub dutch: Vec<String>,
    /// French function words
    #[serde(default = "default_french")]
    pub french: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_english() -> Vec<String> {
    owned(ENGLISH)
}

fn default_dutch() -> Vec<String> {
    owned(DUTCH)
}

fn default_french() -> Vec<String> {
    owned(FRENCH)
}

impl Default for StopWords {
    fn default() -> Self {
        StopWords {
            english: default_english(),
            dutch: default_dutch(),
            french: default_french(),
        }
    }
}

impl StopWords {
    /// No stop words at all
    pub fn empty() -> Self {
        StopWords {
            english: vec![],
            dutch: vec![],
            french: vec![],
        }
    }

    /// All words across every locale (may repeat, e.g. "is")
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.english
            .iter()
            .chain(self.dutch.iter())
            .chain(self.french.iter())
            .map(String::as_str)
    }

    /// Check membership across all locales
    pub fn contains(&self, word: &str) -> bool {
        self.iter().any(|w| w == word)
    }
}
