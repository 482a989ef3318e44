//! Indexed min-priority queue of nodes keyed by log-weight.
//!
//! Supports insert, erase, peek-minimum and priority update, all in
//! `O(log n)`. Equal priorities are ordered by `NodeId`, so the minimum is
//! deterministic regardless of hash iteration order.

use std::collections::BTreeSet;

use ordered_float::OrderedFloat;

use crate::graph::{NodeId, NodeProperty};

#[derive(Debug, Clone, Default)]
pub struct NodePriorityQueue {
    order: BTreeSet<(OrderedFloat<f64>, NodeId)>,
    priorities: NodeProperty<OrderedFloat<f64>>,
}

impl NodePriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `n` with `priority`. Returns `false` (and leaves the queue
    /// unchanged) if `n` is already queued.
    pub fn insert(&mut self, n: NodeId, priority: f64) -> bool {
        if self.priorities.contains_key(&n) {
            return false;
        }
        let p = OrderedFloat(priority);
        self.priorities.insert(n, p);
        self.order.insert((p, n));
        true
    }

    /// Remove `n`, returning its priority if it was queued.
    pub fn erase(&mut self, n: NodeId) -> Option<f64> {
        let p = self.priorities.remove(&n)?;
        self.order.remove(&(p, n));
        Some(p.into_inner())
    }

    /// Change the priority of `n`, inserting it if absent.
    pub fn set_priority(&mut self, n: NodeId, priority: f64) {
        let p = OrderedFloat(priority);
        if let Some(old) = self.priorities.insert(n, p) {
            if old == p {
                return;
            }
            self.order.remove(&(old, n));
        }
        self.order.insert((p, n));
    }

    #[inline]
    pub fn contains(&self, n: NodeId) -> bool {
        self.priorities.contains_key(&n)
    }

    #[inline]
    pub fn priority(&self, n: NodeId) -> Option<f64> {
        self.priorities.get(&n).map(|p| p.into_inner())
    }

    /// Node with the smallest priority.
    #[inline]
    pub fn top(&self) -> Option<NodeId> {
        self.order.first().map(|&(_, n)| n)
    }

    /// Smallest priority in the queue.
    #[inline]
    pub fn top_priority(&self) -> Option<f64> {
        self.order.first().map(|&(p, _)| p.into_inner())
    }

    /// Remove and return the node with the smallest priority.
    pub fn pop(&mut self) -> Option<(NodeId, f64)> {
        let (p, n) = self.order.pop_first()?;
        self.priorities.remove(&n);
        Some((n, p.into_inner()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }

    /// Queued nodes in increasing priority order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.order.iter().map(|&(p, n)| (n, p.into_inner()))
    }
}
