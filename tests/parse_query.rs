mod common;
use common::*;
use message_search::{Filter, FilterKind, SearchMessageQuery, Term};

#[tokio::test]
async fn single_filter_sets_exactly_one_field() {
    let compiler = compiler();
    let cases = [
        "after:2023-01-01",
        "since:2023-01-01",
        "before:2023-01-01",
        "until:2023-01-01",
        "in:general",
        "#general",
        "to:@alice",
        "@bob",
        "from:alice",
        "by:@bob",
        "citation:00000000-0000-0000-0000-000000000007",
        "cite:https://chat.example.com/messages/00000000-0000-0000-0000-000000000007",
        "is:bot",
        "not:bot",
        "has:attachments",
        "-has:audio",
    ];
    for token in cases {
        let query = compiler.parse_query(token).await;
        assert_eq!(query.word, None, "{token}");
        let set = serde_json::to_value(&query).unwrap();
        assert_eq!(set.as_object().unwrap().len(), 1, "{token}: {set}");
    }
}

#[tokio::test]
async fn channel_sigil_and_in_prefix_agree() {
    let compiler = compiler();
    let sigil = compiler.parse_query("#general").await;
    let prefixed = compiler.parse_query("in:general").await;
    assert_eq!(sigil, prefixed);
    assert_eq!(sigil.in_channel, Some(channel(GENERAL)));
    assert_eq!(
        compiler.parse_query("#team/proj").await.in_channel,
        Some(channel(PROJ))
    );
    assert_eq!(
        compiler.parse_query("in:#TEAM\\Proj").await.in_channel,
        Some(channel(PROJ))
    );
}

#[tokio::test]
async fn bot_negation() {
    let compiler = compiler();
    assert_eq!(compiler.parse_query("is:bot").await.bot, Some(true));
    assert_eq!(compiler.parse_query("-is:bot").await.bot, Some(false));
    assert_eq!(compiler.parse_query("not:bot").await.bot, Some(false));
}

#[tokio::test]
async fn malformed_values_yield_an_empty_query() {
    let compiler = compiler();
    for query in [
        "after:not-a-date",
        "before:2023-02-30",
        "in:nowhere",
        "#team/pro",
        "from:@carol",
        "to:@",
        "citation:1234",
        "is:human",
        "has:url",
        "-has:",
        "",
        "    ",
    ] {
        assert!(
            compiler.parse_query(query).await.is_empty(),
            "{query:?} should compile to nothing"
        );
    }
}

#[tokio::test]
async fn words_concatenate_around_filters() {
    let compiler = compiler();
    let query = compiler
        .parse_query("hello after:2023-01-01 world")
        .await;
    assert_eq!(query.word.as_deref(), Some("hello world"));
    assert_eq!(query.after.as_deref(), Some("2023-01-01T00:00:00.000Z"));
}

#[tokio::test]
async fn dropped_tokens_do_not_affect_the_rest() {
    let compiler = compiler();
    let query = compiler
        .parse_query("deploy  from:@nobody  has:image   failed")
        .await;
    assert_eq!(
        query,
        SearchMessageQuery {
            word: Some("deploy failed".to_string()),
            has_image: Some(true),
            ..Default::default()
        }
    );
}

#[tokio::test]
async fn unknown_prefixes_and_urls_are_words() {
    let compiler = compiler();
    let query = compiler
        .parse_query("foo:bar https://example.com/x")
        .await;
    assert_eq!(query.word.as_deref(), Some("foo:bar https://example.com/x"));
}

#[tokio::test]
async fn first_filter_of_a_kind_wins() {
    let compiler = compiler();
    let query = compiler.parse_query("from:alice from:bob").await;
    assert_eq!(query.from, Some(user(ALICE)));
    let query = compiler.parse_query("has:image -has:image").await;
    assert_eq!(query.has_image, Some(true));
}

#[tokio::test]
async fn users_resolve_by_handle_then_display_name() {
    let compiler = compiler();
    assert_eq!(
        compiler.parse_query("from:@alice").await.from,
        Some(user(ALICE))
    );
    // A display name containing a space cannot be written as one token.
    assert_eq!(compiler.parse_query("from:Alice").await.from, None);
    assert_eq!(compiler.parse_query("to:infra").await.to, Some(user(INFRA)));
    assert_eq!(compiler.parse_query("from:infra").await.from, None);
}

#[tokio::test]
async fn terms_keep_token_order() {
    let compiler = compiler();
    let terms = compiler
        .parse_terms("a #general in:nowhere -is:bot b")
        .await;
    let kinds: Vec<_> = terms
        .iter()
        .map(|term| term.as_filter().map(Filter::kind))
        .collect();
    assert_eq!(
        kinds,
        [None, Some(FilterKind::In), Some(FilterKind::AttrFlag), None]
    );
    assert_eq!(terms[0], Term::Word("a".to_string()));
    assert_eq!(terms[1].as_filter().map(Filter::raw), Some("#general"));
    assert_eq!(terms[2].as_filter().and_then(Filter::negate), Some(true));
}
