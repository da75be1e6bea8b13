#![allow(dead_code)]
//! Shared helpers for `channel-tree` integration tests.

use channel_tree::{ChannelMatcher, ChannelNode, ChannelTree};
use search_syntax::ChannelId;

pub fn id(n: u128) -> ChannelId {
    ChannelId::from_u128(n)
}

/// Builds a tree from `(id, name, parent)` rows in order.
pub fn tree(rows: &[(u128, &str, Option<u128>)]) -> ChannelTree {
    rows.iter()
        .map(|&(n, name, parent)| ChannelNode::new(id(n), name, parent.map(id)))
        .collect()
}

pub fn names(tree: &ChannelTree, ids: &[ChannelId]) -> Vec<String> {
    ids.iter()
        .map(|&id| tree.full_path(id).expect("matched channel is in the tree"))
        .collect()
}

pub fn resolve(tree: &ChannelTree, query: &str) -> Vec<String> {
    names(tree, &ChannelMatcher::new(tree).resolve(query))
}
