//! Working set of nodes whose classification may be stale.

use crate::graph::{NodeId, NodeSet};

#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    stale: NodeSet,
}

impl ChangeTracker {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            stale: NodeSet::with_capacity(cap),
        }
    }

    #[inline]
    pub fn mark(&mut self, n: NodeId) {
        self.stale.insert(n);
    }

    /// Returns `true` if `n` was stale.
    #[inline]
    pub fn unmark(&mut self, n: NodeId) -> bool {
        self.stale.remove(&n)
    }

    #[inline]
    pub fn contains(&self, n: NodeId) -> bool {
        self.stale.contains(&n)
    }

    /// Copy of the stale nodes, so refreshing them can mutate the tracker.
    pub fn snapshot(&self) -> Vec<NodeId> {
        self.stale.iter().copied().collect()
    }

    /// Copy of the stale nodes satisfying `pred`.
    pub fn snapshot_filtered(&self, mut pred: impl FnMut(NodeId) -> bool) -> Vec<NodeId> {
        self.stale.iter().copied().filter(|&n| pred(n)).collect()
    }

    pub fn len(&self) -> usize {
        self.stale.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stale.is_empty()
    }
}
