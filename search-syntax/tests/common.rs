#![allow(dead_code)]
//! Shared helpers for `search-syntax` integration tests.

use search_syntax::*;

pub fn filter_of(token: &str) -> ExtractedFilter<'_> {
    match extract(token) {
        Extracted::Filter(filter) => filter,
        Extracted::Plain(plain) => panic!("expected Filter, got Plain({plain:?})"),
    }
}

pub fn is_plain(token: &str) {
    match extract(token) {
        Extracted::Plain(plain) => assert_eq!(plain, token),
        Extracted::Filter(filter) => panic!("expected Plain, got: {filter:?}"),
    }
}

pub fn kind_is(token: &str, kind: FilterKind) {
    assert_eq!(filter_of(token).kind, kind, "token {token:?}");
}

pub fn body_is(token: &str, body: &str) {
    assert_eq!(filter_of(token).body, body, "token {token:?}");
}

pub fn negated(token: &str) -> bool {
    filter_of(token).negate
}

pub fn tokens(query: &str) -> Vec<&str> {
    tokenize(query).collect()
}
