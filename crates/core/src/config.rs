//! Analysis configuration via `analysis.toml`
//!
//! Every field has a default, so an empty file (or no file) yields the
//! stock pipelines. Out-of-range values are not rejected: `normalized()`
//! substitutes a safe default and logs at debug level.

use crate::error::{Error, Result};
use crate::stopwords::StopWords;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Config file name conventionally used by hosts
pub const CONFIG_FILE_NAME: &str = "analysis.toml";

/// Default inline punctuation kept inside segmenter tokens
pub const DEFAULT_INLINE_PUNCTUATION: [char; 3] = ['.', '-', '#'];

/// Default longest run the segmenter emits as one token
pub const DEFAULT_MAX_TOKEN_CHARS: usize = 255;

/// Default largest edge n-gram
pub const DEFAULT_MAX_GRAM: usize = 1024;

/// Largest shingle width
pub const MAX_SHINGLES: usize = 2;

/// Characters at which the growth segmenter withholds a prefix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthBoundary {
    /// Any Unicode whitespace
    #[default]
    Whitespace,
    /// Whitespace plus the configured inline punctuation
    InlinePunctuation,
    /// Exactly these characters
    Chars(Vec<char>),
}

impl GrowthBoundary {
    /// Resolve to a concrete boundary set
    pub fn resolve(&self, inline_punctuation: &[char]) -> BoundarySet {
        match self {
            GrowthBoundary::Whitespace => BoundarySet {
                whitespace: true,
                chars: vec![],
            },
            GrowthBoundary::InlinePunctuation => BoundarySet {
                whitespace: true,
                chars: inline_punctuation.to_vec(),
            },
            GrowthBoundary::Chars(chars) => BoundarySet {
                whitespace: false,
                chars: chars.clone(),
            },
        }
    }
}

/// Resolved growth boundary test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundarySet {
    whitespace: bool,
    chars: Vec<char>,
}

impl BoundarySet {
    /// Check whether `c` is a boundary character
    pub fn contains(&self, c: char) -> bool {
        (self.whitespace && c.is_whitespace()) || self.chars.contains(&c)
    }
}

/// Analysis configuration loaded from `analysis.toml`.
///
/// # Example
///
/// ```toml
/// inline_punctuation = [".", "-", "#"]
/// use_stop_words = true
/// min_shingles = 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Non-alphanumeric characters the segmenter keeps inside tokens
    pub inline_punctuation: Vec<char>,
    /// Characters the compound-splitter splits on
    pub split_chars: Vec<char>,
    /// Longest character run emitted as one token
    pub max_token_chars: usize,
    /// Smallest edge n-gram in characters
    pub min_gram: usize,
    /// Largest edge n-gram in characters
    pub max_gram: usize,
    /// Smallest shingle width, 1 or 2
    pub min_shingles: usize,
    /// Separator joining shingle parts
    pub shingle_separator: char,
    /// Whether pipelines with a stop-word stage apply it
    pub use_stop_words: bool,
    /// Carry a dropped stop word's position increment onto the next token
    pub stop_filter_preserves_positions: bool,
    /// Where the growth segmenter withholds prefixes
    pub growth_boundary: GrowthBoundary,
    /// Stop-word lists
    pub stop_words: StopWords,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            inline_punctuation: DEFAULT_INLINE_PUNCTUATION.to_vec(),
            split_chars: DEFAULT_INLINE_PUNCTUATION.to_vec(),
            max_token_chars: DEFAULT_MAX_TOKEN_CHARS,
            min_gram: 1,
            max_gram: DEFAULT_MAX_GRAM,
            min_shingles: 1,
            shingle_separator: '_',
            use_stop_words: false,
            stop_filter_preserves_positions: false,
            growth_boundary: GrowthBoundary::default(),
            stop_words: StopWords::default(),
        }
    }
}

impl AnalysisConfig {
    /// Copy of this config with out-of-range values replaced by safe defaults
    pub fn normalized(&self) -> Self {
        let mut config = self.clone();
        if config.max_token_chars == 0 {
            debug!(
                max_token_chars = config.max_token_chars,
                "max_token_chars out of range, using default"
            );
            config.max_token_chars = DEFAULT_MAX_TOKEN_CHARS;
        }
        if config.min_gram == 0 {
            debug!("min_gram out of range, using 1");
            config.min_gram = 1;
        }
        if config.max_gram < config.min_gram {
            debug!(
                min_gram = config.min_gram,
                max_gram = config.max_gram,
                "max_gram below min_gram, clamping"
            );
            config.max_gram = config.min_gram;
        }
        if !(1..=MAX_SHINGLES).contains(&config.min_shingles) {
            debug!(
                min_shingles = config.min_shingles,
                "min_shingles outside [1, 2], using 1"
            );
            config.min_shingles = 1;
        }
        config
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r##"# Strata text analysis configuration
#
# Non-alphanumeric characters kept inside segmenter tokens.
inline_punctuation = [".", "-", "#"]

# Characters the compound-splitter splits on ("A-Ha" -> "A-Ha", "A", "Ha").
split_chars = [".", "-", "#"]

# Longer runs are split into several tokens.
max_token_chars = 255

# Edge n-gram sizes for type-ahead pipelines.
min_gram = 1
max_gram = 1024

# Shingle pipeline: 1 = unigrams and bigrams, 2 = bigrams only.
min_shingles = 1
shingle_separator = "_"

# Apply stop words in pipelines that have a stop-word stage.
use_stop_words = false
stop_filter_preserves_positions = false

# Growth segmenter boundary: "whitespace", "inline_punctuation",
# or { chars = [";"] }
growth_boundary = "whitespace"

# [stop_words]
# english = ["a", "an", "the"]
# dutch = ["de", "het", "een"]
# french = ["la", "le", "les"]
"##
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| {
            Error::ConfigError(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        info!(path = %path.display(), "Loaded analysis config");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
