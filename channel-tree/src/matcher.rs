use crate::ChannelTree;
use hashbrown::HashSet;
use query_segmentation::{Segment, query_segmentation};
use search_syntax::ChannelId;
use tracing::debug;

/// Hierarchical channel search over a [`ChannelTree`] snapshot.
///
/// A query without separators matches every channel whose name contains it;
/// a query with `/` or `\` is matched level by level (see
/// [`query_segmentation`]). Every seed pulls in its whole subtree. Channels
/// whose name equals the query are reported before the rest.
#[derive(Debug, Clone, Copy)]
pub struct ChannelMatcher<'t> {
    tree: &'t ChannelTree,
}

impl<'t> ChannelMatcher<'t> {
    pub fn new(tree: &'t ChannelTree) -> Self {
        Self { tree }
    }

    /// Every matching channel of the tree, full matches first.
    pub fn resolve(&self, query: &str) -> Vec<ChannelId> {
        self.run(query, |_| true)
    }

    pub fn resolve_first(&self, query: &str) -> Option<ChannelId> {
        self.resolve(query).into_iter().next()
    }

    /// Narrows `items` down to the channels matching `query`. An empty query
    /// keeps `items` as they are.
    ///
    /// The walk still covers the whole tree, so a listed channel is found
    /// through an unlisted ancestor.
    pub fn filter(&self, items: &[ChannelId], query: &str) -> Vec<ChannelId> {
        if query.is_empty() {
            return items.to_vec();
        }
        let listed: HashSet<ChannelId> = items.iter().copied().collect();
        self.run(query, |id| listed.contains(id))
    }

    fn run<F>(&self, query: &str, include: F) -> Vec<ChannelId>
    where
        F: Fn(&ChannelId) -> bool,
    {
        let lowered = query.to_lowercase();
        let segments = query_segmentation(&lowered);
        let mut walk = MatchWalk {
            tree: self.tree,
            query: &lowered,
            include,
            visited: HashSet::new(),
            full: Vec::new(),
            partial: Vec::new(),
        };

        match segments.as_slice() {
            [Segment::Substr(needle)] if query.chars().count() == 1 => {
                // One character would hit nearly every name as a substring;
                // only channels named exactly that character seed the walk.
                for entry in self.tree.entries() {
                    if entry.node.name.chars().count() == 1 && entry.name_lower == *needle {
                        walk.descend(entry.node.id);
                    }
                }
            }
            [Segment::Substr(needle)] => {
                for entry in self.tree.entries() {
                    if entry.name_lower.contains(needle) {
                        walk.descend(entry.node.id);
                    }
                }
            }
            _ => {
                for entry in self.tree.entries() {
                    walk.descend_segments(entry.node.id, &segments);
                }
            }
        }

        debug!(
            "Channel query {:?}: {} full, {} partial, {} visited",
            query,
            walk.full.len(),
            walk.partial.len(),
            walk.visited.len()
        );
        walk.finish()
    }
}

struct MatchWalk<'t, 'q, F> {
    tree: &'t ChannelTree,
    query: &'q str,
    include: F,
    visited: HashSet<ChannelId>,
    full: Vec<ChannelId>,
    partial: Vec<ChannelId>,
}

impl<F> MatchWalk<'_, '_, F>
where
    F: Fn(&ChannelId) -> bool,
{
    /// Marks `id` and its not yet visited descendants as matched.
    fn descend(&mut self, id: ChannelId) {
        let tree = self.tree;
        let Some(entry) = tree.entry(id) else {
            return;
        };
        if !self.visited.insert(id) {
            return;
        }
        if (self.include)(&id) {
            if entry.name_lower == self.query {
                self.full.push(id);
            } else {
                self.partial.push(id);
            }
        }
        for &child in entry.node.children.iter() {
            self.descend(child);
        }
    }

    /// Consumes one segment per tree level starting at `id`. Reaching the end
    /// of `rest` hands the node over to [`Self::descend`].
    fn descend_segments(&mut self, id: ChannelId, rest: &[Segment<'_>]) {
        let tree = self.tree;
        let Some(entry) = tree.entry(id) else {
            return;
        };
        if self.visited.contains(&id) {
            return;
        }
        let Some((segment, tail)) = rest.split_first() else {
            return;
        };
        // Segments come from the lowered query, so names are compared lowered
        // too: `GPS/Times` and `gps/times` walk the same channels.
        if !segment.matches(&entry.name_lower) {
            return;
        }
        if tail.is_empty() {
            self.descend(id);
            return;
        }
        for &child in entry.node.children.iter() {
            self.descend_segments(child, tail);
        }
    }

    fn finish(self) -> Vec<ChannelId> {
        let mut matched = self.full;
        matched.extend(self.partial);
        matched
    }
}
