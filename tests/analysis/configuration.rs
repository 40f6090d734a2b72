//! Configuration-Driven Pipeline Tests
//!
//! `analysis.toml` values reach the stages; out-of-range values are
//! replaced rather than rejected.

use crate::common::*;

fn from_toml(content: &str) -> AnalyzerRegistry {
    registry_with(AnalysisConfig::from_toml_str(content).unwrap())
}

#[test]
fn stop_words_switch_on() {
    let reg = from_toml("use_stop_words = true");
    let tokens = analyze(&reg, "stemmed", "the cats of the town");
    assert_eq!(texts(&tokens), vec!["cat", "town"]);
}

#[test]
fn stop_words_off_by_default() {
    let reg = default_registry();
    let tokens = analyze(&reg, "stemmed", "the cats");
    assert_eq!(texts(&tokens), vec!["the", "cat"]);
}

#[test]
fn custom_stop_list() {
    let reg = from_toml(
        r#"
use_stop_words = true
stop_filter_preserves_positions = true

[stop_words]
english = ["cats"]
dutch = []
french = []
"#,
    );
    let tokens = analyze(&reg, "stemmed-plain", "the cats town");
    assert_eq!(summary(&tokens), vec![("the", 0, 3, 1), ("town", 9, 13, 2)]);
}

#[test]
fn inline_punctuation_and_split_chars() {
    let reg = from_toml(
        r#"
inline_punctuation = ["_"]
split_chars = ["_"]
"#,
    );
    let tokens = analyze(&reg, "exact", "snake_case a-b");
    assert_eq!(texts(&tokens), vec!["snake_case", "snake", "case", "a", "b"]);
}

#[test]
fn shingle_width_and_separator() {
    let reg = from_toml(
        r#"
min_shingles = 2
shingle_separator = " "
"#,
    );
    let tokens = analyze(&reg, "shingle", "big red dog");
    assert_eq!(texts(&tokens), vec!["big red", "red dog"]);
}

#[test]
fn out_of_range_values_fall_back() {
    let reg = from_toml(
        r#"
min_shingles = 7
min_gram = 0
max_token_chars = 0
"#,
    );
    let shingles = analyze(&reg, "shingle", "a b");
    assert_eq!(texts(&shingles), vec!["a", "a_b", "b"]);

    let grams = analyze(&reg, "type-ahead", "ab");
    assert_eq!(texts(&grams), vec!["a", "ab"]);

    let config = reg.resources().config();
    assert_eq!(config.min_shingles, 1);
    assert_eq!(config.min_gram, 1);
    assert_eq!(config.max_token_chars, 255);
}

#[test]
fn long_runs_split_at_max_token_chars() {
    let reg = from_toml("max_token_chars = 4");
    let tokens = analyze(&reg, "exact", "abcdefghij");
    assert_eq!(
        summary(&tokens),
        vec![("abcd", 0, 4, 1), ("efgh", 4, 8, 1), ("ij", 8, 10, 1)]
    );
}

#[test]
fn malformed_toml_is_config_error() {
    let err = AnalysisConfig::from_toml_str("min_gram = \"two\"").unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}
