use hashbrown::HashMap;
use query_segmentation::is_path_separator;
use search_syntax::ChannelId;
use serde::{Deserialize, Serialize};
use thin_vec::ThinVec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelNode {
    pub id: ChannelId,
    pub name: String,
    #[serde(default)]
    pub parent: Option<ChannelId>,
    #[serde(default)]
    pub children: ThinVec<ChannelId>,
}

impl ChannelNode {
    pub fn new(id: ChannelId, name: impl Into<String>, parent: Option<ChannelId>) -> Self {
        Self {
            id,
            name: name.into(),
            parent,
            children: ThinVec::new(),
        }
    }

    pub fn add_children(&mut self, child: ChannelId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ChannelEntry {
    pub(crate) node: ChannelNode,
    /// Lowercased once on insert; every comparison in the matcher is
    /// case-insensitive.
    pub(crate) name_lower: String,
}

/// Snapshot of the channel hierarchy. Iteration follows insertion order, which
/// is also the order matches are reported in.
#[derive(Debug, Clone, Default)]
pub struct ChannelTree {
    entries: Vec<ChannelEntry>,
    index: HashMap<ChannelId, usize>,
    /// Children inserted before their parent, keyed by the missing parent.
    waiting: HashMap<ChannelId, ThinVec<ChannelId>>,
}

impl ChannelTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `node`, replacing any node with the same id in place. A node
    /// naming a known parent is linked into that parent's children; one naming
    /// an unknown parent is linked once that parent arrives.
    pub fn insert(&mut self, node: ChannelNode) {
        let id = node.id;
        let parent = node.parent;
        let mut entry = ChannelEntry {
            name_lower: node.name.to_lowercase(),
            node,
        };
        match self.index.get(&id) {
            Some(&slot) => {
                // Children learned from earlier inserts survive a refresh.
                let previous = &self.entries[slot].node;
                for child in previous.children.iter().copied() {
                    entry.node.add_children(child);
                }
                let old_parent = previous.parent;
                self.entries[slot] = entry;
                let old_slot = old_parent
                    .filter(|_| old_parent != parent)
                    .and_then(|old| self.index.get(&old).copied());
                if let Some(old_slot) = old_slot {
                    self.entries[old_slot].node.children.retain(|child| *child != id);
                }
            }
            None => {
                for child in self.waiting.remove(&id).unwrap_or_default() {
                    // Skip children re-parented while they waited.
                    if self.get(child).and_then(|node| node.parent) == Some(id) {
                        entry.node.add_children(child);
                    }
                }
                self.index.insert(id, self.entries.len());
                self.entries.push(entry);
            }
        }
        if let Some(parent) = parent {
            match self.index.get(&parent) {
                Some(&slot) => self.entries[slot].node.add_children(id),
                None => {
                    let waiting = self.waiting.entry(parent).or_default();
                    if !waiting.contains(&id) {
                        waiting.push(id);
                    }
                }
            }
        }
    }

    pub fn get(&self, id: ChannelId) -> Option<&ChannelNode> {
        self.entry(id).map(|entry| &entry.node)
    }

    pub(crate) fn entry(&self, id: ChannelId) -> Option<&ChannelEntry> {
        self.index.get(&id).map(|&slot| &self.entries[slot])
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &ChannelEntry> {
        self.entries.iter()
    }

    pub fn contains(&self, id: ChannelId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelNode> {
        self.entries.iter().map(|entry| &entry.node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Channels without a parent, or whose parent is not part of the snapshot.
    pub fn roots(&self) -> impl Iterator<Item = &ChannelNode> {
        self.iter().filter(|node| match node.parent {
            Some(parent) => !self.contains(parent),
            None => true,
        })
    }

    /// `parent/child/grandchild` path of a channel.
    pub fn full_path(&self, id: ChannelId) -> Option<String> {
        let mut names = Vec::new();
        let mut current = self.get(id)?;
        loop {
            names.push(current.name.as_str());
            // A well formed tree is never deeper than its size.
            if names.len() > self.len() {
                return None;
            }
            match current.parent.and_then(|parent| self.get(parent)) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        names.reverse();
        Some(names.join("/"))
    }

    /// Resolves a whole channel path, case-insensitively, starting at the roots.
    pub fn path_to_id(&self, path: &str) -> Option<ChannelId> {
        let lowered = path.to_lowercase();
        let mut segments = lowered.split(is_path_separator);
        let first = segments.next()?;
        if first.is_empty() {
            return None;
        }
        let mut current = self
            .entries
            .iter()
            .filter(|entry| match entry.node.parent {
                Some(parent) => !self.contains(parent),
                None => true,
            })
            .find(|entry| entry.name_lower == first)?;
        for segment in segments {
            current = current
                .node
                .children
                .iter()
                .filter_map(|&child| self.entry(child))
                .find(|entry| entry.name_lower == segment)?;
        }
        Some(current.node.id)
    }
}

impl FromIterator<ChannelNode> for ChannelTree {
    fn from_iter<T: IntoIterator<Item = ChannelNode>>(iter: T) -> Self {
        let mut tree = ChannelTree::new();
        for node in iter {
            tree.insert(node);
        }
        tree
    }
}
