mod common;
use common::*;
use search_syntax::*;

#[test]
fn every_documented_prefix_is_recognized() {
    let cases = [
        ("after:2024-01-01", FilterKind::After, "2024-01-01"),
        ("since:2024-01-01", FilterKind::After, "2024-01-01"),
        ("before:2024-01-01", FilterKind::Before, "2024-01-01"),
        ("until:2024-01-01", FilterKind::Before, "2024-01-01"),
        ("in:general", FilterKind::In, "general"),
        ("#general", FilterKind::In, "general"),
        ("to:alice", FilterKind::To, "alice"),
        ("@alice", FilterKind::To, "alice"),
        ("from:bob", FilterKind::From, "bob"),
        ("by:bob", FilterKind::From, "bob"),
        ("citation:abc", FilterKind::Citation, "abc"),
        ("cite:abc", FilterKind::Citation, "abc"),
        ("is:bot", FilterKind::AttrFlag, "bot"),
        ("-is:bot", FilterKind::AttrFlag, "bot"),
        ("not:bot", FilterKind::AttrFlag, "bot"),
        ("has:image", FilterKind::MediaFlag, "image"),
        ("-has:image", FilterKind::MediaFlag, "image"),
    ];

    for (token, kind, body) in cases {
        kind_is(token, kind);
        body_is(token, body);
        assert_eq!(filter_of(token).raw, token);
    }
}

#[test]
fn hash_and_in_prefix_collapse_to_the_same_kind() {
    let hash = filter_of("#general");
    let prefixed = filter_of("in:general");
    assert_eq!(hash.kind, prefixed.kind);
    assert_eq!(hash.body, prefixed.body);
    assert_eq!(hash.negate, prefixed.negate);
}

#[test]
fn negation_only_comes_from_negative_prefixes() {
    assert!(!negated("is:bot"));
    assert!(negated("-is:bot"));
    assert!(negated("not:bot"));
    assert!(!negated("has:audio"));
    assert!(negated("-has:audio"));
    for token in ["after:x", "#x", "@x", "from:x", "cite:x"] {
        assert!(!negated(token), "{token}");
    }
}

#[test]
fn empty_bodies_are_still_filters() {
    body_is("#", "");
    kind_is("#", FilterKind::In);
    body_is("@", "");
    kind_is("@", FilterKind::To);
    body_is("after:", "");
}

#[test]
fn unknown_prefixes_are_plain() {
    is_plain("foo:bar");
    is_plain("https://example.com/path");
    is_plain("-in:general");
    is_plain("hello");
    is_plain("");
}

#[test]
fn body_keeps_everything_after_the_first_prefix() {
    body_is("in:gps/times/alice", "gps/times/alice");
    body_is("after:2024-01-01T00:00:00Z", "2024-01-01T00:00:00Z");
    body_is("##double", "#double");
    body_is("to:@alice", "@alice");
}
