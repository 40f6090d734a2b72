//! Highlighting Pipeline Tests
//!
//! Stem-with-original emits both forms at one position; the deduplicator
//! merges repeats at a start offset into the widest span.

use crate::common::*;

#[test]
fn query_terms_keep_both_forms() {
    let reg = default_registry();
    let tokens = analyze(&reg, "highlight-query", "running the");
    assert_eq!(
        summary(&tokens),
        vec![
            ("run", 0, 7, 1),
            ("running", 0, 7, 0),
            ("the", 8, 11, 1),
        ]
    );
}

#[test]
fn stored_text_prefixes_merge_into_widest_span() {
    let reg = default_registry();
    let tokens = analyze(&reg, "highlight-original", "cats");
    // "cat" is both the 3-gram and the stem of "cats"
    let cats: Vec<_> = tokens.iter().filter(|t| t.text == "cat").collect();
    assert_eq!(cats.len(), 1);
    assert_eq!((cats[0].start_offset, cats[0].end_offset), (0, 4));

    assert_eq!(texts(&tokens), vec!["c", "ca", "cat", "cats"]);
}

#[test]
fn no_duplicate_start_and_text_pairs() {
    let reg = default_registry();
    let text = "Walking walkers walked the walk-way";
    for name in ["highlight-original", "highlight-query"] {
        let tokens = analyze(&reg, name, text);
        assert_offsets_sound(&tokens, text.len());
        let mut seen = std::collections::HashSet::new();
        for token in &tokens {
            assert!(
                seen.insert((token.start_offset, token.text.clone())),
                "{name}: duplicate {token}"
            );
        }
    }
}

#[test]
fn highlight_pipelines_are_marked() {
    let reg = default_registry();
    for name in ["highlight-original", "highlight-query"] {
        let factory = reg.get_pipeline(name, None).unwrap();
        assert_eq!(factory.spec().usage, strata_text::PipelineUse::Highlight);
    }
}

#[test]
fn stem_with_original_refused_for_index_use() {
    let reg = default_registry();
    let spec = PipelineSpec::new(strata_text::SegmenterSpec::Inline)
        .filter(strata_text::FilterSpec::Normalize)
        .filter(strata_text::FilterSpec::StemWithOriginal);
    let err = reg
        .register("index-both-forms", spec, ScoringPolicy::NoLength)
        .unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}
