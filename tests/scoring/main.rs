//! Scoring Policy Test Suite
//!
//! Policies looked up through the registry, norms computed from real
//! pipeline output, and determinism of every weight function.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test scoring
//! ```

#[path = "../common/mod.rs"]
mod common;

use common::*;
use proptest::prelude::*;
use strata_search::{FlatSimilarity, NoLengthSimilarity, StandardSimilarity};

// ============================================================================
// Test Helpers
// ============================================================================

fn norm_of(registry: &AnalyzerRegistry, name: &str, text: &str) -> f32 {
    let mut stream = registry.open(name, "body", text).unwrap();
    let state = FieldInvertState::from_tokens(&mut stream, 1.0).unwrap();
    registry
        .similarity(name)
        .unwrap()
        .compute_norm("body", &state)
}

fn all_policies() -> Vec<Box<dyn Similarity>> {
    vec![
        Box::new(StandardSimilarity::new()),
        Box::new(StandardSimilarity::new().with_discount_overlaps(true)),
        Box::new(FlatSimilarity::new()),
        Box::new(NoLengthSimilarity::new()),
        Box::new(NoLengthSimilarity::new().with_discount_overlaps(true)),
    ]
}

// ============================================================================
// Policy Pairing
// ============================================================================

#[test]
fn flat_pipelines_ignore_padding() {
    let reg = default_registry();
    let short = norm_of(&reg, "exact", "red");
    let padded = norm_of(&reg, "exact", "red and a great many other padding words");
    assert_eq!(short, 1.0);
    assert_eq!(short, padded);
}

#[test]
fn no_length_pipelines_ignore_padding() {
    let reg = default_registry();
    let short = norm_of(&reg, "stemmed", "red");
    let padded = norm_of(&reg, "stemmed", "red and a great many other padding words");
    assert_eq!(short, padded);
}

#[test]
fn standard_policy_penalizes_length() {
    let reg = default_registry();
    let spec = reg.get_pipeline("stemmed", None).unwrap().spec().clone();
    reg.register("free-text", spec, ScoringPolicy::Standard)
        .unwrap();
    let short = norm_of(&reg, "free-text", "red");
    let padded = norm_of(&reg, "free-text", "red blue green yellow");
    assert_eq!(short, 1.0);
    assert!((padded - 0.5).abs() < 1e-6);
}

#[test]
fn overlap_discount_uses_compound_parts() {
    let reg = default_registry();
    let mut stream = reg.open("exact", "body", "A-Ha take-on-me").unwrap();
    let state = FieldInvertState::from_tokens(&mut stream, 1.0).unwrap();
    // a-ha, a, ha, take-on-me, take, on, me
    assert_eq!(state.length, 7);
    assert_eq!(state.num_overlap, 5);

    let counted = StandardSimilarity::new().compute_norm("body", &state);
    let discounted = StandardSimilarity::new()
        .with_discount_overlaps(true)
        .compute_norm("body", &state);
    assert!((counted - 1.0 / 7f32.sqrt()).abs() < 1e-6);
    assert!((discounted - 1.0 / 2f32.sqrt()).abs() < 1e-6);
}

#[test]
fn boost_scales_norm() {
    let state = FieldInvertState {
        length: 3,
        num_overlap: 0,
        boost: 4.0,
    };
    assert_eq!(FlatSimilarity::new().compute_norm("f", &state), 4.0);
}

#[test]
fn flat_coord_ignores_missing_clauses() {
    let reg = default_registry();
    let flat = reg.similarity("keyword").unwrap();
    let no_length = reg.similarity("type-ahead").unwrap();
    assert_eq!(flat.coord(1, 3), 1.0);
    assert!((no_length.coord(1, 4) - 0.25).abs() < 1e-6);
}

// ============================================================================
// Determinism (property-based)
// ============================================================================

proptest! {
    #[test]
    fn prop_weights_are_deterministic(
        freq in 0.0f32..1e6,
        doc_freq in 0u64..10_000,
        total_docs in 0u64..10_000,
        terms in 0u32..100_000,
        overlap in 0u32..64,
        max_overlap in 0u32..64,
        distance in 0u32..1_000,
        sum in -10.0f32..1e6,
    ) {
        for sim in all_policies() {
            prop_assert_eq!(sim.tf(freq).to_bits(), sim.tf(freq).to_bits());
            prop_assert_eq!(
                sim.idf(doc_freq, total_docs).to_bits(),
                sim.idf(doc_freq, total_docs).to_bits()
            );
            prop_assert_eq!(
                sim.length_norm("f", terms).to_bits(),
                sim.length_norm("f", terms).to_bits()
            );
            prop_assert_eq!(sim.query_norm(sum).to_bits(), sim.query_norm(sum).to_bits());
            prop_assert_eq!(
                sim.coord(overlap, max_overlap).to_bits(),
                sim.coord(overlap, max_overlap).to_bits()
            );
            prop_assert_eq!(
                sim.sloppy_freq(distance).to_bits(),
                sim.sloppy_freq(distance).to_bits()
            );
        }
    }

    #[test]
    fn prop_weights_are_finite(
        freq in 0.0f32..1e6,
        doc_freq in 0u64..10_000,
        total_docs in 0u64..10_000,
        terms in 0u32..100_000,
        max_overlap in 0u32..64,
        sum in -10.0f32..1e6,
    ) {
        for sim in all_policies() {
            prop_assert!(sim.tf(freq).is_finite());
            prop_assert!(sim.idf(doc_freq, total_docs).is_finite());
            prop_assert!(sim.length_norm("f", terms).is_finite());
            prop_assert!(sim.query_norm(sum).is_finite());
            prop_assert!(sim.coord(max_overlap / 2, max_overlap).is_finite());
        }
    }

    #[test]
    fn prop_no_length_norm_is_constant(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let sim = NoLengthSimilarity::new();
        prop_assert_eq!(sim.length_norm("f", a), sim.length_norm("f", b));
        let flat = FlatSimilarity::new();
        prop_assert_eq!(flat.length_norm("f", a), 1.0);
    }
}
