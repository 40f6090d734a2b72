//! Compound Splitting Tests
//!
//! Whole token first at its own position, then each part at increment 0
//! with offsets into the original field.

use crate::common::*;

#[test]
fn a_ha_yields_whole_then_parts() {
    let reg = default_registry();
    let tokens = analyze(&reg, "exact", "A-Ha");
    assert_eq!(
        summary(&tokens),
        vec![("a-ha", 0, 4, 1), ("a", 0, 1, 0), ("ha", 2, 4, 0)]
    );
}

#[test]
fn plain_word_passes_unchanged() {
    let reg = default_registry();
    let tokens = analyze(&reg, "exact", "hello");
    assert_eq!(tokens, vec![Token::new("hello", 0, 5)]);
}

#[test]
fn parts_map_back_into_field() {
    let reg = default_registry();
    let text = "Release notes for v2.0-RC1 #42";
    let tokens = analyze(&reg, "exact", text);
    assert_offsets_sound(&tokens, text.len());
    for token in &tokens {
        assert_eq!(
            text[token.start_offset..token.end_offset].to_lowercase(),
            token.text
        );
    }
    assert_eq!(
        texts(&tokens),
        vec!["release", "notes", "for", "v2.0-rc1", "v2", "0", "rc1", "#42", "42"]
    );
}

#[test]
fn punctuation_only_tokens_vanish() {
    let reg = default_registry();
    let tokens = analyze(&reg, "exact", "left -- . ## right");
    assert_eq!(texts(&tokens), vec!["left", "right"]);
    assert!(tokens.iter().all(|t| t.position_increment == 1));
}

#[test]
fn stemmed_pipeline_stems_every_part() {
    let reg = default_registry();
    let tokens = analyze(&reg, "stemmed", "Running-Dogs");
    let words = texts(&tokens);
    assert_eq!(words.len(), 3);
    assert_eq!(&words[1..], &["run", "dog"]);
    assert_eq!(tokens[1].position_increment, 0);
    assert_eq!(tokens[2].position_increment, 0);
}

#[test]
fn shingles_pair_parts_with_next_position() {
    let reg = default_registry();
    let tokens = analyze(&reg, "shingle", "A-Ha x");
    assert_eq!(
        texts(&tokens),
        vec!["a-ha", "a", "ha", "a-ha_x", "a_x", "ha_x", "x"]
    );
    assert_offsets_sound(&tokens, "A-Ha x".len());
    // Parts are never joined to the compound they came from
    assert!(tokens.iter().all(|t| !t.text.starts_with("a-ha_a")));
    assert!(tokens.iter().all(|t| t.text != "a_ha"));
}

#[test]
fn alnum_parts_deduplicate_within_field() {
    let reg = default_registry();
    let tokens = analyze(&reg, "alnum-parts", "Rock/Pop - rock & POP (live)");
    assert_eq!(texts(&tokens), vec!["rock", "pop", "live"]);
    assert_offsets_sound(&tokens, "Rock/Pop - rock & POP (live)".len());
}
