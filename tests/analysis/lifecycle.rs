//! Stream Lifecycle Tests
//!
//! One stream instance is reused across documents through reset and
//! reopen; a failed document must not poison the next one.

use crate::common::*;
use std::io::{self, Read};
use strata_analysis::{CompoundSplitFilter, DeduplicateFilter, NormalizeFilter};
use strata_core::{collect_tokens, TokenStream};

/// Host source that fails on a marker word
struct FlakySource {
    words: Vec<String>,
    cursor: usize,
    offset: usize,
}

impl FlakySource {
    fn new(text: &str) -> Self {
        FlakySource {
            words: text.split(' ').map(str::to_string).collect(),
            cursor: 0,
            offset: 0,
        }
    }
}

impl TokenStream for FlakySource {
    fn next_token(&mut self) -> strata_core::Result<Option<Token>> {
        let Some(word) = self.words.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;
        if word == "BOOM" {
            return Err(Error::stage("flaky-source", "marker word"));
        }
        let token = Token::new(word.as_str(), self.offset, self.offset + word.len());
        self.offset += word.len() + 1;
        Ok(Some(token))
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    fn reopen(&mut self, text: &str) {
        *self = FlakySource::new(text);
    }

    fn finalize_offsets(&mut self) -> Option<usize> {
        None
    }

    fn close(&mut self) {
        self.words.clear();
        self.reset();
    }

    fn name(&self) -> &'static str {
        "flaky-source"
    }
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
    }
}

#[test]
fn reset_reproduces_every_preset() {
    let reg = default_registry();
    let text = "The A-Ha take-on-me #1 hits, running v1.2";
    for name in reg.names() {
        let mut stream = reg.open(&name, "f", text).unwrap();
        let first = stream.collect_tokens().unwrap();
        stream.reset();
        assert_eq!(stream.collect_tokens().unwrap(), first, "{name}");
    }
}

#[test]
fn reopen_moves_to_next_document() {
    let reg = default_registry();
    let mut stream = reg.open("exact", "f", "first-doc").unwrap();
    assert_eq!(stream.collect_tokens().unwrap().len(), 3);
    stream.reopen("second");
    assert_eq!(
        stream.collect_tokens().unwrap(),
        vec![Token::new("second", 0, 6)]
    );
}

#[test]
fn close_releases_input() {
    let reg = default_registry();
    let mut stream = reg.open("exact", "f", "some text").unwrap();
    stream.next_token().unwrap();
    stream.close();
    assert!(stream.next_token().unwrap().is_none());
}

#[test]
fn host_failure_propagates_through_filters() {
    let chain = NormalizeFilter::lowercase(Box::new(CompoundSplitFilter::new(Box::new(
        FlakySource::new("a-b BOOM c"),
    ))));
    let mut chain: Box<dyn TokenStream> = Box::new(chain);

    let mut seen = Vec::new();
    let err = loop {
        match chain.next_token() {
            Ok(Some(token)) => seen.push(token.text),
            Ok(None) => panic!("expected failure"),
            Err(e) => break e,
        }
    };
    assert_eq!(seen, vec!["a-b", "a", "b"]);
    assert!(matches!(err, Error::StageError { ref stage, .. } if stage == "flaky-source"));
}

#[test]
fn deduplicator_returns_nothing_partial_and_recovers() {
    let mut dedup = DeduplicateFilter::new(Box::new(FlakySource::new("x x BOOM y")));
    assert!(dedup.next_token().is_err());
    assert!(dedup.next_token().unwrap().is_none());

    dedup.reopen("x x y");
    let tokens = collect_tokens(&mut dedup).unwrap();
    assert_eq!(texts(&tokens), vec!["x", "x", "y"]);
}

#[test]
fn reader_errors_surface_as_io() {
    let reg = default_registry();
    let factory = reg.get_pipeline("exact", None).unwrap();
    let err = factory.open_reader("body", BrokenReader).unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn reader_input_matches_string_input() {
    let reg = default_registry();
    let factory = reg.get_pipeline("stemmed", None).unwrap();
    let text = "Walking the dogs";
    let from_reader = factory
        .open_reader("body", text.as_bytes())
        .unwrap()
        .collect_tokens()
        .unwrap();
    assert_eq!(from_reader, factory.analyze(text).unwrap());
}
