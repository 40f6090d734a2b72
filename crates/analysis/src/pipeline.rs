//! Declarative pipeline composition
//!
//! A pipeline is one segmenter followed by an ordered list of filters. The
//! chain is declared as data ([`PipelineSpec`]) and turned into stages by a
//! [`PipelineFactory`], one fresh chain per [`PipelineFactory::open`].
//!
//! ```text
//! PipelineSpec ──validate──▶ PipelineFactory ──open(field, text)──▶ AnalysisStream
//!                                 │                                   │
//!                       AnalysisResources                    Box<dyn TokenStream>
//!              (config, stemmer, normalizer, stop set)        (segmenter → filters)
//! ```
//!
//! Factories are immutable and `Send + Sync`; share them through `Arc` and
//! open one stream per document on whichever thread analyzes it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::sync::Arc;
use strata_core::{AnalysisConfig, Error, Result, Token, TokenStream};
use tracing::trace;

use crate::filter::{
    stop_set, AlnumSegmentFilter, CompoundSplitFilter, DeduplicateFilter, EdgeNgramFilter,
    ShingleFilter, StemFilter, StemWithOriginalFilter, StopFilter, StopSet,
};
use crate::growth::GrowthSegmenter;
use crate::normalize::{LowercaseNormalizer, NormalizeFilter, Normalizer};
use crate::segmenter::{InlineSegmenter, KeywordSegmenter};
use crate::stemmer::{PorterStemmer, Stemmer};
use crate::BoxTokenStream;

// ============================================================================
// Declarations
// ============================================================================

/// Head stage of a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmenterSpec {
    /// [`InlineSegmenter`]
    Inline,
    /// [`KeywordSegmenter`]
    Keyword,
    /// [`GrowthSegmenter`]
    Growth,
}

/// Filter stage, applied in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterSpec {
    /// [`CompoundSplitFilter`] on the configured split characters
    CompoundSplit,
    /// [`NormalizeFilter`] with the shared normalizer
    Normalize,
    /// [`StopFilter`] on the configured stop words
    StopWords,
    /// [`StemFilter`]
    Stem,
    /// [`StemWithOriginalFilter`], highlight pipelines only
    StemWithOriginal,
    /// [`DeduplicateFilter`]
    Deduplicate,
    /// [`AlnumSegmentFilter`]
    AlnumSegment,
    /// [`EdgeNgramFilter`] with the configured gram sizes
    EdgeNgram,
    /// [`ShingleFilter`] with the configured width and separator
    Shingle,
}

impl FilterSpec {
    fn is_stemming(self) -> bool {
        matches!(self, FilterSpec::Stem | FilterSpec::StemWithOriginal)
    }
}

/// What the pipeline's output feeds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineUse {
    /// Index postings and query terms
    #[default]
    Index,
    /// Highlighting and annotation only
    Highlight,
}

/// Boolean switches applied when assembling a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineToggles {
    /// Keep `StopWords` stages
    pub stop_words: bool,
    /// Keep `Stem` and `StemWithOriginal` stages
    pub stemming: bool,
}

impl Default for PipelineToggles {
    fn default() -> Self {
        PipelineToggles {
            stop_words: false,
            stemming: true,
        }
    }
}

/// Ordered pipeline declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Head stage
    pub segmenter: SegmenterSpec,
    /// Filters in application order
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
    /// Consumer of the output
    #[serde(default, rename = "use")]
    pub usage: PipelineUse,
}

impl PipelineSpec {
    /// Segmenter only, for index use
    pub fn new(segmenter: SegmenterSpec) -> Self {
        PipelineSpec {
            segmenter,
            filters: Vec::new(),
            usage: PipelineUse::Index,
        }
    }

    /// Builder: append a filter
    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.filters.push(filter);
        self
    }

    /// Builder: mark the consumer
    pub fn for_use(mut self, usage: PipelineUse) -> Self {
        self.usage = usage;
        self
    }

    /// Build a declaration from a stage list, dropping stages the toggles
    /// switch off
    pub fn assemble(
        segmenter: SegmenterSpec,
        filters: &[FilterSpec],
        toggles: PipelineToggles,
    ) -> Self {
        let filters = filters
            .iter()
            .copied()
            .filter(|f| toggles.stop_words || *f != FilterSpec::StopWords)
            .filter(|f| toggles.stemming || !f.is_stemming())
            .collect();
        PipelineSpec {
            segmenter,
            filters,
            usage: PipelineUse::Index,
        }
    }

    /// Reject chains whose output would corrupt an index
    pub fn validate(&self) -> Result<()> {
        if self.usage == PipelineUse::Index && self.filters.contains(&FilterSpec::StemWithOriginal)
        {
            return Err(Error::ConfigError(
                "stem_with_original emits two tokens per input and is only allowed in highlight pipelines"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Resources
// ============================================================================

/// Shared, immutable inputs to stage construction
#[derive(Clone)]
pub struct AnalysisResources {
    config: AnalysisConfig,
    stemmer: Arc<dyn Stemmer>,
    normalizer: Arc<dyn Normalizer>,
    stop_words: StopSet,
}

impl AnalysisResources {
    /// Porter stemming and lower-casing over a normalized copy of `config`
    pub fn new(config: &AnalysisConfig) -> Self {
        let config = config.normalized();
        let stop_words = stop_set(&config.stop_words);
        AnalysisResources {
            config,
            stemmer: Arc::new(PorterStemmer::new()),
            normalizer: Arc::new(LowercaseNormalizer),
            stop_words,
        }
    }

    /// Builder: replace the stemming capability
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Builder: replace the normalization capability
    pub fn with_normalizer(mut self, normalizer: Arc<dyn Normalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// The normalized configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}

impl Default for AnalysisResources {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl fmt::Debug for AnalysisResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisResources")
            .field("config", &self.config)
            .field("stemmer", &self.stemmer.name())
            .field("stop_words", &self.stop_words.len())
            .finish()
    }
}

// ============================================================================
// PipelineFactory
// ============================================================================

/// Validated pipeline that opens per-document streams
#[derive(Debug, Clone)]
pub struct PipelineFactory {
    spec: PipelineSpec,
    resources: Arc<AnalysisResources>,
}

impl PipelineFactory {
    /// Validate `spec` and bind it to `resources`
    pub fn new(spec: PipelineSpec, resources: Arc<AnalysisResources>) -> Result<Self> {
        spec.validate()?;
        Ok(PipelineFactory { spec, resources })
    }

    /// The pipeline declaration
    pub fn spec(&self) -> &PipelineSpec {
        &self.spec
    }

    /// The shared resources
    pub fn resources(&self) -> &Arc<AnalysisResources> {
        &self.resources
    }

    /// Open a fresh stream over `text` for `field`
    pub fn open(&self, field: &str, text: &str) -> AnalysisStream {
        trace!(
            field,
            segmenter = ?self.spec.segmenter,
            filters = self.spec.filters.len(),
            bytes = text.len(),
            "Opening analysis stream"
        );
        AnalysisStream {
            field: field.to_string(),
            stages: self.build(text),
        }
    }

    /// Read all of `reader`, then open a stream over it
    pub fn open_reader<R: Read>(&self, field: &str, mut reader: R) -> Result<AnalysisStream> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(self.open(field, &text))
    }

    /// Analyze `text` to completion
    pub fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        self.open("", text).collect_tokens()
    }

    fn build(&self, text: &str) -> BoxTokenStream {
        let config = &self.resources.config;
        let mut stream: BoxTokenStream = match self.spec.segmenter {
            SegmenterSpec::Inline => Box::new(InlineSegmenter::from_config(text, config)),
            SegmenterSpec::Keyword => Box::new(KeywordSegmenter::new(text)),
            SegmenterSpec::Growth => Box::new(GrowthSegmenter::from_config(text, config)),
        };
        for filter in &self.spec.filters {
            stream = self.wrap(*filter, stream);
        }
        stream
    }

    fn wrap(&self, filter: FilterSpec, input: BoxTokenStream) -> BoxTokenStream {
        let resources = &self.resources;
        let config = &resources.config;
        match filter {
            FilterSpec::CompoundSplit => Box::new(CompoundSplitFilter::with_split_chars(
                input,
                &config.split_chars,
            )),
            FilterSpec::Normalize => {
                Box::new(NormalizeFilter::new(input, Arc::clone(&resources.normalizer)))
            }
            FilterSpec::StopWords => Box::new(
                StopFilter::new(input, Arc::clone(&resources.stop_words))
                    .preserve_positions(config.stop_filter_preserves_positions),
            ),
            FilterSpec::Stem => Box::new(StemFilter::new(input, Arc::clone(&resources.stemmer))),
            FilterSpec::StemWithOriginal => Box::new(StemWithOriginalFilter::new(
                input,
                Arc::clone(&resources.stemmer),
            )),
            FilterSpec::Deduplicate => Box::new(DeduplicateFilter::new(input)),
            FilterSpec::AlnumSegment => Box::new(AlnumSegmentFilter::new(input)),
            FilterSpec::EdgeNgram => Box::new(EdgeNgramFilter::new(
                input,
                config.min_gram,
                config.max_gram,
            )),
            FilterSpec::Shingle => Box::new(ShingleFilter::new(
                input,
                config.min_shingles,
                config.shingle_separator,
            )),
        }
    }
}

// ============================================================================
// AnalysisStream
// ============================================================================

/// One document's pass through a pipeline
///
/// Single-threaded: it may move between threads but is never shared.
/// Iterating yields `Result<Token>`; a failed document leaves the stream
/// reusable after [`AnalysisStream::reset`] or [`AnalysisStream::reopen`].
pub struct AnalysisStream {
    field: String,
    stages: BoxTokenStream,
}

impl AnalysisStream {
    /// Field this stream analyzes
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Pull the next token from the end of the chain
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.stages.next_token()
    }

    /// Rewind to the start of the same text
    pub fn reset(&mut self) {
        self.stages.reset();
    }

    /// Start over on another document's text
    pub fn reopen(&mut self, text: &str) {
        self.stages.reopen(text);
    }

    /// Final offset once the stream is exhausted
    pub fn finalize_offsets(&mut self) -> Option<usize> {
        self.stages.finalize_offsets()
    }

    /// Release buffered state and input
    pub fn close(&mut self) {
        self.stages.close();
    }

    /// Drain the remaining tokens
    pub fn collect_tokens(&mut self) -> Result<Vec<Token>> {
        strata_core::collect_tokens(&mut self.stages)
    }
}

impl fmt::Debug for AnalysisStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisStream")
            .field("field", &self.field)
            .field("head", &self.stages.name())
            .finish()
    }
}

impl Iterator for AnalysisStream {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl TokenStream for AnalysisStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        self.stages.next_token()
    }

    fn reset(&mut self) {
        self.stages.reset();
    }

    fn reopen(&mut self, text: &str) {
        self.stages.reopen(text);
    }

    fn finalize_offsets(&mut self) -> Option<usize> {
        self.stages.finalize_offsets()
    }

    fn close(&mut self) {
        self.stages.close();
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}
