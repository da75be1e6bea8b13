use anyhow::{Context, Result};
use async_trait::async_trait;
use channel_tree::{ChannelNode, ChannelTree};
use hashbrown::HashMap;
use parking_lot::RwLock;
use search_syntax::UserId;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, sync::Arc};
use tracing::info;

/// Everything the compiler needs to resolve channel and user references.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Snapshot of the channel tree. One compile works on one snapshot.
    fn channels(&self) -> Arc<ChannelTree>;

    async fn find_user(&self, name: &str) -> Option<UserId>;

    async fn find_group(&self, name: &str) -> Option<UserId>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub id: UserId,
    /// Handle written after `@`.
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub id: UserId,
    pub name: String,
}

/// JSON document a directory can be loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    #[serde(default)]
    pub channels: Vec<ChannelNode>,
    #[serde(default)]
    pub users: Vec<UserEntry>,
    #[serde(default)]
    pub groups: Vec<GroupEntry>,
}

impl DirectorySnapshot {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Malformed directory snapshot")
    }

    pub fn read_from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read directory snapshot {path:?}"))?;
        Self::from_json_str(&text).with_context(|| format!("Failed to load {path:?}"))
    }
}

#[derive(Debug, Default)]
struct UserIndex {
    by_name: HashMap<String, UserId>,
    by_display_name: HashMap<String, UserId>,
}

/// [`Directory`] kept in memory. Safe to fill from one thread while another
/// compiles queries.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    channels: RwLock<Arc<ChannelTree>>,
    users: RwLock<UserIndex>,
    groups: RwLock<HashMap<String, UserId>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: DirectorySnapshot) -> Self {
        let directory = Self::new();
        directory.load_snapshot(snapshot);
        directory
    }

    /// Compiles already holding the previous tree keep using it.
    pub fn insert_channel(&self, node: ChannelNode) {
        let mut channels = self.channels.write();
        Arc::make_mut(&mut *channels).insert(node);
    }

    pub fn insert_user(&self, user: UserEntry) {
        let mut users = self.users.write();
        if let Some(display_name) = user.display_name {
            // Display names are not unique; the first one registered keeps it.
            users.by_display_name.entry(display_name).or_insert(user.id);
        }
        users.by_name.insert(user.name, user.id);
    }

    pub fn insert_group(&self, group: GroupEntry) {
        self.groups.write().insert(group.name, group.id);
    }

    pub fn load_snapshot(&self, snapshot: DirectorySnapshot) {
        let DirectorySnapshot {
            channels,
            users,
            groups,
        } = snapshot;
        let (channel_count, user_count, group_count) = (channels.len(), users.len(), groups.len());
        {
            let mut guard = self.channels.write();
            let tree = Arc::make_mut(&mut *guard);
            for node in channels {
                tree.insert(node);
            }
        }
        for user in users {
            self.insert_user(user);
        }
        for group in groups {
            self.insert_group(group);
        }
        info!(
            "Directory snapshot loaded: {} channels, {} users, {} groups",
            channel_count, user_count, group_count
        );
    }

    fn lookup_user(&self, name: &str) -> Option<UserId> {
        let users = self.users.read();
        users
            .by_name
            .get(name)
            .or_else(|| users.by_display_name.get(name))
            .copied()
    }

    fn lookup_group(&self, name: &str) -> Option<UserId> {
        self.groups.read().get(name).copied()
    }
}

#[async_trait]
impl Directory for InMemoryDirectory {
    fn channels(&self) -> Arc<ChannelTree> {
        self.channels.read().clone()
    }

    async fn find_user(&self, name: &str) -> Option<UserId> {
        self.lookup_user(name)
    }

    async fn find_group(&self, name: &str) -> Option<UserId> {
        self.lookup_group(name)
    }
}
