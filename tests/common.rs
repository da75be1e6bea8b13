#![allow(dead_code)]
//! Shared fixtures for the `message-search` integration tests.

use message_search::{
    ChannelId, ChannelNode, GroupEntry, InMemoryDirectory, QueryCompiler, ReadyGate, UserEntry,
    UserId,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Routes library logs (dropped tokens, snapshot loads) to the test output.
/// `RUST_LOG` overrides the default `debug` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn channel(n: u128) -> ChannelId {
    ChannelId::from_u128(n)
}

pub fn user(n: u128) -> UserId {
    UserId::from_u128(n)
}

pub const GENERAL: u128 = 1;
pub const TEAM: u128 = 2;
pub const PROJ: u128 = 3;
pub const ALICE: u128 = 10;
pub const BOB: u128 = 11;
pub const INFRA: u128 = 20;

/// `general`, `team/proj`, users `alice` (display name `Alice L.`) and `bob`,
/// group `infra`.
pub fn directory() -> InMemoryDirectory {
    let directory = InMemoryDirectory::new();
    directory.insert_channel(ChannelNode::new(channel(GENERAL), "general", None));
    directory.insert_channel(ChannelNode::new(channel(TEAM), "team", None));
    directory.insert_channel(ChannelNode::new(channel(PROJ), "proj", Some(channel(TEAM))));
    directory.insert_user(UserEntry {
        id: user(ALICE),
        name: "alice".to_string(),
        display_name: Some("Alice L.".to_string()),
    });
    directory.insert_user(UserEntry {
        id: user(BOB),
        name: "bob".to_string(),
        display_name: None,
    });
    directory.insert_group(GroupEntry {
        id: user(INFRA),
        name: "infra".to_string(),
    });
    directory
}

pub fn compiler() -> QueryCompiler {
    init_tracing();
    QueryCompiler::new(Arc::new(directory()), ReadyGate::open())
}
