//! Type-Ahead Tests
//!
//! Edge n-grams for per-word prefixes, growth segmentation for prefixes of
//! the whole field.

use crate::common::*;
use strata_text::{GrowthBoundary, TokenStream};

#[test]
fn edge_grams_share_a_position() {
    let reg = default_registry();
    let tokens = analyze(&reg, "type-ahead", "Hi yo");
    assert_eq!(
        summary(&tokens),
        vec![
            ("h", 0, 1, 1),
            ("hi", 0, 2, 0),
            ("y", 3, 4, 1),
            ("yo", 3, 5, 0),
        ]
    );
}

#[test]
fn gram_bounds_come_from_config() {
    let reg = registry_with(AnalysisConfig {
        min_gram: 2,
        max_gram: 3,
        ..AnalysisConfig::default()
    });
    let tokens = analyze(&reg, "type-ahead", "a quick");
    assert_eq!(texts(&tokens), vec!["qu", "qui"]);
}

#[test]
fn stemmed_type_ahead_stems_each_gram() {
    let reg = default_registry();
    let tokens = analyze(&reg, "type-ahead-stemmed", "cats");
    assert_eq!(texts(&tokens), vec!["c", "ca", "cat", "cat"]);
}

#[test]
fn growth_emits_every_typed_prefix() {
    let reg = default_registry();
    let tokens = analyze(&reg, "growth", "New Yo");
    assert_eq!(texts(&tokens), vec!["n", "ne", "new", "new y", "new yo"]);
    assert!(tokens.iter().all(|t| t.start_offset == 0));
    let ends: Vec<usize> = tokens.iter().map(|t| t.end_offset).collect();
    assert_eq!(ends, vec![1, 2, 3, 5, 6]);
}

#[test]
fn growth_final_offset_covers_trailing_whitespace() {
    let reg = default_registry();
    let mut stream = reg.open("growth", "title", "ab  ").unwrap();
    let tokens = stream.collect_tokens().unwrap();
    assert_eq!(texts(&tokens), vec!["a", "ab"]);
    assert_eq!(stream.finalize_offsets(), Some(4));
}

#[test]
fn growth_boundary_is_configurable() {
    let reg = registry_with(AnalysisConfig {
        growth_boundary: GrowthBoundary::InlinePunctuation,
        ..AnalysisConfig::default()
    });
    let tokens = analyze(&reg, "growth", "a-b");
    assert_eq!(texts(&tokens), vec!["a", "a-b"]);
}

#[test]
fn growth_through_token_stream_trait() {
    let reg = default_registry();
    let mut stream = reg.open("growth", "f", "xy").unwrap();
    let stage: &mut dyn TokenStream = &mut stream;
    assert_eq!(stage.name(), "pipeline");
    assert_eq!(stage.next_token().unwrap().unwrap().text, "x");
}
