//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from any suite's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

pub use strata_text::{
    analyze_string, AnalysisConfig, AnalyzerRegistry, Error, FieldInvertState, PipelineSpec,
    ScoringPolicy, Similarity, Token,
};

// ============================================================================
// Registry helpers
// ============================================================================

/// Registry with every preset and default configuration
pub fn default_registry() -> AnalyzerRegistry {
    AnalyzerRegistry::with_defaults(&AnalysisConfig::default())
        .expect("presets always validate")
}

/// Registry with every preset over `config`
pub fn registry_with(config: AnalysisConfig) -> AnalyzerRegistry {
    AnalyzerRegistry::with_defaults(&config).expect("presets always validate")
}

/// Run pipeline `name` over `text` and collect the tokens
pub fn analyze(registry: &AnalyzerRegistry, name: &str, text: &str) -> Vec<Token> {
    registry
        .open(name, "field", text)
        .expect("pipeline registered")
        .collect_tokens()
        .expect("built-in stages never fail")
}

// ============================================================================
// Token helpers
// ============================================================================

/// Token texts in order
pub fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// (text, start, end, increment) tuples for compact assertions
pub fn summary(tokens: &[Token]) -> Vec<(&str, usize, usize, u32)> {
    tokens
        .iter()
        .map(|t| {
            (
                t.text.as_str(),
                t.start_offset,
                t.end_offset,
                t.position_increment,
            )
        })
        .collect()
}

/// Assert every token lies inside a field of `len` bytes
pub fn assert_offsets_sound(tokens: &[Token], len: usize) {
    for token in tokens {
        assert!(
            token.start_offset <= token.end_offset && token.end_offset <= len,
            "unsound offsets on {token} for field of {len} bytes"
        );
    }
}
