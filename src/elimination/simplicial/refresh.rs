//! Lazy re-classification of stale nodes and the driver-facing queries.

use crate::elim_error::ElimError;
use crate::elimination::classifier::Classification;
use crate::elimination::counters::pairs;
use crate::graph::{Edge, NodeId, UndirectedGraph};

use super::SimplicialSet;

impl<G: UndirectedGraph> SimplicialSet<'_, G> {
    /// Recompute the class of `id` if it is stale; otherwise do nothing.
    pub(super) fn update_list(&mut self, id: NodeId) {
        if !self.changed.unmark(id) {
            return;
        }
        let class = self.compute_class(id);
        let w = self.weight(id);
        let old = self.classifier.classify(id, class, w);
        if old != class {
            log::trace!("node {id}: {old} -> {class}");
        }
    }

    /// Class of `id` derived from the current counters.
    pub(super) fn compute_class(&self, id: NodeId) -> Classification {
        let all = pairs(self.graph.degree(id));
        let nb = self.adjacency.count(id);
        if nb == all {
            Classification::Simplicial
        } else if self.almost_simplicial_pivot(id).is_some() {
            Classification::AlmostSimplicial
        } else if nb as f64 >= self.config.quasi_ratio * all as f64 {
            Classification::QuasiSimplicial
        } else {
            Classification::Unclassified
        }
    }

    /// A neighbour `y` of `id` whose removal leaves a clique, i.e. every
    /// adjacent pair not involving `y` accounts for all `C(deg-1, 2)` pairs.
    pub(super) fn almost_simplicial_pivot(&self, id: NodeId) -> Option<NodeId> {
        let deg = self.graph.degree(id);
        if deg == 0 {
            return None;
        }
        let target = pairs(deg - 1);
        let nb = self.adjacency.count(id);
        self.graph.neighbours(id).find(|&y| {
            nb.checked_sub(self.triangles.count(Edge::new(y, id))) == Some(target)
        })
    }

    /// Refresh stale members of `class` first, then, if no eligible node
    /// showed up, every remaining stale node.
    fn has_candidate(&mut self, class: Classification) -> bool {
        let classifier = &self.classifier;
        let members = self
            .changed
            .snapshot_filtered(|n| classifier.membership(n) == Some(class));
        for n in members {
            self.update_list(n);
        }
        if self.top_is_eligible(class) {
            return true;
        }
        for n in self.changed.snapshot() {
            self.update_list(n);
        }
        self.top_is_eligible(class)
    }

    fn top_is_eligible(&self, class: Classification) -> bool {
        let Some(top) = self.classifier.queue(class).and_then(|q| q.top_priority()) else {
            return false;
        };
        class == Classification::Simplicial || top <= self.log_tree_width + self.log_threshold
    }

    fn best_candidate(&mut self, class: Classification) -> Result<NodeId, ElimError> {
        if !self.has_candidate(class) {
            return Err(ElimError::NoCandidate(class));
        }
        self.classifier
            .queue(class)
            .and_then(|q| q.top())
            .ok_or(ElimError::NoCandidate(class))
    }

    fn refreshed_is(&mut self, id: NodeId, class: Classification) -> bool {
        self.update_list(id);
        self.classifier.membership(id) == Some(class)
    }

    /// Is there a simplicial node?
    pub fn has_simplicial_node(&mut self) -> bool {
        self.has_candidate(Classification::Simplicial)
    }

    /// Is there an almost-simplicial node light enough to stay within the
    /// tree-width bound plus the fill threshold?
    pub fn has_almost_simplicial_node(&mut self) -> bool {
        self.has_candidate(Classification::AlmostSimplicial)
    }

    /// Is there a quasi-simplicial node light enough to stay within the
    /// tree-width bound plus the fill threshold?
    pub fn has_quasi_simplicial_node(&mut self) -> bool {
        self.has_candidate(Classification::QuasiSimplicial)
    }

    /// Lightest simplicial node.
    ///
    /// # Errors
    /// [`ElimError::NoCandidate`] when [`has_simplicial_node`](Self::has_simplicial_node) is false.
    pub fn best_simplicial_node(&mut self) -> Result<NodeId, ElimError> {
        self.best_candidate(Classification::Simplicial)
    }

    /// Lightest eligible almost-simplicial node.
    pub fn best_almost_simplicial_node(&mut self) -> Result<NodeId, ElimError> {
        self.best_candidate(Classification::AlmostSimplicial)
    }

    /// Lightest eligible quasi-simplicial node.
    pub fn best_quasi_simplicial_node(&mut self) -> Result<NodeId, ElimError> {
        self.best_candidate(Classification::QuasiSimplicial)
    }

    pub fn is_simplicial(&mut self, id: NodeId) -> bool {
        self.refreshed_is(id, Classification::Simplicial)
    }

    pub fn is_almost_simplicial(&mut self, id: NodeId) -> bool {
        self.refreshed_is(id, Classification::AlmostSimplicial)
    }

    pub fn is_quasi_simplicial(&mut self, id: NodeId) -> bool {
        self.refreshed_is(id, Classification::QuasiSimplicial)
    }

    /// Size of the simplicial queue, without refreshing stale nodes.
    pub fn nb_simplicial_nodes(&self) -> usize {
        self.queue_len(Classification::Simplicial)
    }

    pub fn nb_almost_simplicial_nodes(&self) -> usize {
        self.queue_len(Classification::AlmostSimplicial)
    }

    pub fn nb_quasi_simplicial_nodes(&self) -> usize {
        self.queue_len(Classification::QuasiSimplicial)
    }

    fn queue_len(&self, class: Classification) -> usize {
        self.classifier.queue(class).map_or(0, |q| q.len())
    }

    /// Refresh every stale node.
    pub fn refresh_all(&mut self) {
        for n in self.changed.snapshot() {
            self.update_list(n);
        }
    }
}
