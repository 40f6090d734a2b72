//! Named preset pipelines
//!
//! | Name                 | Chain |
//! |----------------------|-------|
//! | `exact`              | inline, compound split, normalize |
//! | `shingle`            | `exact` + shingle |
//! | `stemmed-plain`      | inline, normalize, [stop words], stem |
//! | `stemmed`            | inline, compound split, normalize, [stop words], stem |
//! | `type-ahead`         | inline, compound split, normalize, edge n-gram |
//! | `type-ahead-stemmed` | `type-ahead` + stem |
//! | `highlight-original` | `type-ahead` + stem with original, deduplicate |
//! | `highlight-query`    | inline, compound split, normalize, stem with original, deduplicate |
//! | `keyword`            | keyword, normalize |
//! | `growth`             | growth, normalize |
//! | `alnum-parts`        | keyword, normalize, alnum segment |
//!
//! Stop-word stages are kept only when `use_stop_words` is set.

use strata_core::{AnalysisConfig, Error, Result};

use crate::pipeline::FilterSpec::{
    AlnumSegment, CompoundSplit, Deduplicate, EdgeNgram, Normalize, Shingle, Stem,
    StemWithOriginal, StopWords,
};
use crate::pipeline::{FilterSpec, PipelineSpec, PipelineToggles, PipelineUse, SegmenterSpec};

/// Whole words plus compound parts
pub const EXACT: &str = "exact";
/// Exact words joined into bigrams
pub const SHINGLE: &str = "shingle";
/// Stemmed words without compound splitting
pub const STEMMED_PLAIN: &str = "stemmed-plain";
/// Stemmed words and compound parts
pub const STEMMED: &str = "stemmed";
/// Word prefixes for search-as-you-type
pub const TYPE_AHEAD: &str = "type-ahead";
/// Stemmed word prefixes
pub const TYPE_AHEAD_STEMMED: &str = "type-ahead-stemmed";
/// Highlighting of stored text
pub const HIGHLIGHT_ORIGINAL: &str = "highlight-original";
/// Highlighting of query terms
pub const HIGHLIGHT_QUERY: &str = "highlight-query";
/// The whole field as one term
pub const KEYWORD: &str = "keyword";
/// Growing prefixes of the whole field
pub const GROWTH: &str = "growth";
/// Unique alphanumeric parts of the whole field
pub const ALNUM_PARTS: &str = "alnum-parts";

/// Every preset name
pub const PRESET_NAMES: [&str; 11] = [
    EXACT,
    SHINGLE,
    STEMMED_PLAIN,
    STEMMED,
    TYPE_AHEAD,
    TYPE_AHEAD_STEMMED,
    HIGHLIGHT_ORIGINAL,
    HIGHLIGHT_QUERY,
    KEYWORD,
    GROWTH,
    ALNUM_PARTS,
];

const EXACT_CHAIN: &[FilterSpec] = &[CompoundSplit, Normalize];
const TYPE_AHEAD_CHAIN: &[FilterSpec] = &[CompoundSplit, Normalize, EdgeNgram];

/// Look up a preset declaration by name
pub fn preset(name: &str, config: &AnalysisConfig) -> Result<PipelineSpec> {
    let toggles = PipelineToggles {
        stop_words: config.use_stop_words,
        stemming: true,
    };
    let inline =
        |filters: &[FilterSpec]| PipelineSpec::assemble(SegmenterSpec::Inline, filters, toggles);

    let spec = match name {
        EXACT => inline(EXACT_CHAIN),
        SHINGLE => inline(&[EXACT_CHAIN, &[Shingle]].concat()),
        STEMMED_PLAIN => inline(&[Normalize, StopWords, Stem]),
        STEMMED => inline(&[CompoundSplit, Normalize, StopWords, Stem]),
        TYPE_AHEAD => inline(TYPE_AHEAD_CHAIN),
        TYPE_AHEAD_STEMMED => inline(&[TYPE_AHEAD_CHAIN, &[Stem]].concat()),
        HIGHLIGHT_ORIGINAL => {
            inline(&[TYPE_AHEAD_CHAIN, &[StemWithOriginal, Deduplicate]].concat())
                .for_use(PipelineUse::Highlight)
        }
        HIGHLIGHT_QUERY => inline(&[EXACT_CHAIN, &[StemWithOriginal, Deduplicate]].concat())
            .for_use(PipelineUse::Highlight),
        KEYWORD => PipelineSpec::assemble(SegmenterSpec::Keyword, &[Normalize], toggles),
        GROWTH => PipelineSpec::assemble(SegmenterSpec::Growth, &[Normalize], toggles),
        ALNUM_PARTS => {
            PipelineSpec::assemble(SegmenterSpec::Keyword, &[Normalize, AlnumSegment], toggles)
        }
        other => return Err(Error::UnknownPipeline(other.to_string())),
    };
    Ok(spec)
}
