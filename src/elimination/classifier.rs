//! Membership of nodes in the three elimination priority classes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{NodeId, NodeProperty};

use super::priority::NodePriorityQueue;

/// Elimination class of a node. A node sits in at most one queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Unclassified,
    /// The neighbourhood is a clique.
    Simplicial,
    /// Removing one neighbour leaves a clique.
    AlmostSimplicial,
    /// The fraction of adjacent neighbour pairs reaches the quasi ratio.
    QuasiSimplicial,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::Unclassified => "unclassified",
            Classification::Simplicial => "simplicial",
            Classification::AlmostSimplicial => "almost simplicial",
            Classification::QuasiSimplicial => "quasi simplicial",
        };
        f.write_str(s)
    }
}

/// Three log-weight ordered queues plus the class tag of every node.
#[derive(Debug, Clone, Default)]
pub struct NodeClassifier {
    simplicial: NodePriorityQueue,
    almost_simplicial: NodePriorityQueue,
    quasi_simplicial: NodePriorityQueue,
    membership: NodeProperty<Classification>,
}

impl NodeClassifier {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            membership: NodeProperty::with_capacity(cap),
            ..Self::default()
        }
    }

    /// Start tracking `n` as unclassified.
    pub fn register(&mut self, n: NodeId) {
        self.membership.insert(n, Classification::Unclassified);
    }

    #[inline]
    pub fn membership(&self, n: NodeId) -> Option<Classification> {
        self.membership.get(&n).copied()
    }

    pub fn queue(&self, class: Classification) -> Option<&NodePriorityQueue> {
        match class {
            Classification::Simplicial => Some(&self.simplicial),
            Classification::AlmostSimplicial => Some(&self.almost_simplicial),
            Classification::QuasiSimplicial => Some(&self.quasi_simplicial),
            Classification::Unclassified => None,
        }
    }

    fn queue_mut(&mut self, class: Classification) -> Option<&mut NodePriorityQueue> {
        match class {
            Classification::Simplicial => Some(&mut self.simplicial),
            Classification::AlmostSimplicial => Some(&mut self.almost_simplicial),
            Classification::QuasiSimplicial => Some(&mut self.quasi_simplicial),
            Classification::Unclassified => None,
        }
    }

    /// Move `n` into `class` with priority `weight`.
    ///
    /// Staying in the same queue only refreshes the priority. Returns the
    /// previous class.
    pub fn classify(&mut self, n: NodeId, class: Classification, weight: f64) -> Classification {
        let old = self
            .membership
            .insert(n, class)
            .unwrap_or(Classification::Unclassified);
        if old == class {
            if let Some(q) = self.queue_mut(class) {
                q.set_priority(n, weight);
            }
            return old;
        }
        if let Some(q) = self.queue_mut(old) {
            q.erase(n);
        }
        if let Some(q) = self.queue_mut(class) {
            q.insert(n, weight);
        }
        old
    }

    /// Forget `n` entirely.
    pub fn remove(&mut self, n: NodeId) -> Option<Classification> {
        let old = self.membership.remove(&n)?;
        if let Some(q) = self.queue_mut(old) {
            q.erase(n);
        }
        Some(old)
    }

    pub fn len(&self) -> usize {
        self.membership.len()
    }

    pub fn is_empty(&self) -> bool {
        self.membership.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Classification)> + '_ {
        self.membership.iter().map(|(&n, &c)| (n, c))
    }
}
