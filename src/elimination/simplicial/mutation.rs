//! Graph mutations with incremental counter maintenance.

use itertools::Itertools;

#[cfg(feature = "check-invariants")]
use crate::debug_invariants::DebugInvariants;
use crate::elim_error::ElimError;
use crate::elimination::classifier::Classification;
use crate::elimination::counters::pairs;
use crate::graph::{Edge, NodeId, UndirectedGraph};

use super::{SimplicialSet, modality};

impl<G: UndirectedGraph> SimplicialSet<'_, G> {
    /// Insert the edge `u`–`v`, updating weights and triangle counters.
    ///
    /// Does nothing if the edge already exists.
    ///
    /// # Errors
    /// [`ElimError::NodeNotFound`] if an endpoint is missing,
    /// [`ElimError::InvalidArgument`] if `u == v`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<(), ElimError> {
        for n in [u, v] {
            if !self.graph.exists(n) {
                return Err(ElimError::NodeNotFound(n));
            }
        }
        if u == v {
            return Err(ElimError::InvalidArgument(format!(
                "self-loop on node {u}"
            )));
        }
        if self.graph.exists_edge(u, v) {
            return Ok(());
        }
        self.insert_edge(u, v);
        crate::debug_invariants!(self.validate_invariants(), "SimplicialSet::add_edge");
        Ok(())
    }

    /// Remove `edge`, updating weights and triangle counters.
    ///
    /// # Errors
    /// [`ElimError::EdgeNotFound`] if the edge is absent; nothing changes.
    pub fn erase_edge(&mut self, edge: Edge) -> Result<(), ElimError> {
        if !self.graph.contains_edge(edge) {
            return Err(ElimError::EdgeNotFound(edge));
        }
        self.remove_edge(edge);
        crate::debug_invariants!(self.validate_invariants(), "SimplicialSet::erase_edge");
        Ok(())
    }

    /// Remove `id` with all its edges, one edge at a time.
    pub fn erase_node(&mut self, id: NodeId) -> Result<(), ElimError> {
        if !self.graph.exists(id) {
            return Err(ElimError::NodeNotFound(id));
        }
        let nbrs: Vec<NodeId> = self.graph.neighbours(id).collect();
        for n in nbrs {
            self.remove_edge(Edge::new(n, id));
        }
        self.forget_node(id);
        crate::debug_invariants!(self.validate_invariants(), "SimplicialSet::erase_node");
        Ok(())
    }

    /// Remove a simplicial node in `O(deg²)` without going through
    /// [`erase_edge`](Self::erase_edge).
    ///
    /// The log-weight of `id` becomes a witness of the tree width reached so
    /// far and raises [`log_tree_width`](Self::log_tree_width).
    ///
    /// # Errors
    /// [`ElimError::NodeNotFound`] if `id` is absent, [`ElimError::NotAClique`]
    /// if its neighbourhood is not a clique. Nothing changes on error.
    pub fn erase_clique(&mut self, id: NodeId) -> Result<(), ElimError> {
        if !self.graph.exists(id) {
            return Err(ElimError::NodeNotFound(id));
        }
        let nbrs: Vec<NodeId> = self.graph.neighbours(id).collect();
        let deg = nbrs.len();
        if self.adjacency.count(id) != pairs(deg) {
            return Err(ElimError::NotAClique(id));
        }

        let m = modality(self.log_modalities, id);
        for (i, &a) in nbrs.iter().enumerate() {
            // `id` was adjacent to every other neighbour of `a`.
            self.adjacency.sub(a, deg - 1);
            if let Some(w) = self.log_weights.get_mut(&a) {
                *w -= m;
            }
            self.changed.mark(a);
            self.triangles.remove(Edge::new(a, id));
            for &b in &nbrs[i + 1..] {
                self.triangles.decrement(Edge::new(a, b));
            }
        }

        let w = self.weight(id);
        self.log_tree_width = self.log_tree_width.max(w);
        log::debug!("erased clique node {id}: degree {deg}, log-weight {w:.4}");
        self.forget_node(id);
        crate::debug_invariants!(self.validate_invariants(), "SimplicialSet::erase_clique");
        Ok(())
    }

    /// Add the missing edges that turn the neighbourhood of `id` into a
    /// clique, leaving `id` simplicial.
    ///
    /// An almost-simplicial node only needs the edges between its odd
    /// neighbour and the others, so that case costs `O(deg)` insertions
    /// instead of scanning all `O(deg²)` neighbour pairs.
    pub fn make_clique(&mut self, id: NodeId) -> Result<(), ElimError> {
        if !self.graph.exists(id) {
            return Err(ElimError::NodeNotFound(id));
        }
        self.update_list(id);

        let missing: Vec<(NodeId, NodeId)> = match self.classifier.membership(id) {
            Some(Classification::Simplicial) => return Ok(()),
            Some(Classification::AlmostSimplicial) => match self.almost_simplicial_pivot(id) {
                Some(pivot) => self
                    .graph
                    .neighbours(id)
                    .filter(|&n| n != pivot && !self.graph.exists_edge(pivot, n))
                    .map(|n| (pivot, n))
                    .collect(),
                None => self.missing_neighbour_pairs(id),
            },
            _ => self.missing_neighbour_pairs(id),
        };

        for &(a, b) in &missing {
            self.insert_edge(a, b);
            if self.record_fill_ins {
                self.fill_ins.insert(Edge::new(a, b));
            }
        }
        log::trace!("make_clique({id}): {} fill-in edges", missing.len());

        debug_assert_eq!(
            self.adjacency.count(id),
            pairs(self.graph.degree(id)),
            "node {id} is not simplicial after make_clique"
        );
        self.changed.unmark(id);
        let w = self.weight(id);
        self.classifier.classify(id, Classification::Simplicial, w);
        crate::debug_invariants!(self.validate_invariants(), "SimplicialSet::make_clique");
        Ok(())
    }

    // ---------- Bookkeeping primitives ----------

    /// Neighbour pairs of `id` that are not adjacent yet.
    fn missing_neighbour_pairs(&self, id: NodeId) -> Vec<(NodeId, NodeId)> {
        let mut nbrs: Vec<NodeId> = self.graph.neighbours(id).collect();
        nbrs.sort_unstable();
        nbrs.iter()
            .tuple_combinations()
            .filter(|&(&a, &b)| !self.graph.exists_edge(a, b))
            .map(|(&a, &b)| (a, b))
            .collect()
    }

    /// Insert a new edge between two existing, distinct, non-adjacent nodes.
    pub(super) fn insert_edge(&mut self, u: NodeId, v: NodeId) {
        let mods = self.log_modalities;
        if let Some(w) = self.log_weights.get_mut(&u) {
            *w += modality(mods, v);
        }
        if let Some(w) = self.log_weights.get_mut(&v) {
            *w += modality(mods, u);
        }

        let (scan, other) = if self.graph.degree(u) <= self.graph.degree(v) {
            (u, v)
        } else {
            (v, u)
        };
        let mut common = 0usize;
        for w in self.graph.neighbours(scan) {
            if self.graph.exists_edge(other, w) {
                self.triangles.increment(Edge::new(u, w));
                self.triangles.increment(Edge::new(v, w));
                self.adjacency.add(w, 1);
                self.changed.mark(w);
                common += 1;
            }
        }
        self.adjacency.add(u, common);
        self.adjacency.add(v, common);

        self.graph.add_edge(u, v);
        self.triangles.insert(Edge::new(u, v), common);
        self.changed.mark(u);
        self.changed.mark(v);
    }

    /// Exact inverse of [`insert_edge`](Self::insert_edge) for an existing edge.
    pub(super) fn remove_edge(&mut self, edge: Edge) {
        let (u, v) = edge.endpoints();
        self.graph.erase_edge(edge);
        self.triangles.remove(edge);

        let mods = self.log_modalities;
        if let Some(w) = self.log_weights.get_mut(&u) {
            *w -= modality(mods, v);
        }
        if let Some(w) = self.log_weights.get_mut(&v) {
            *w -= modality(mods, u);
        }

        let (scan, other) = if self.graph.degree(u) <= self.graph.degree(v) {
            (u, v)
        } else {
            (v, u)
        };
        let mut common = 0usize;
        for w in self.graph.neighbours(scan) {
            if self.graph.exists_edge(other, w) {
                self.triangles.decrement(Edge::new(u, w));
                self.triangles.decrement(Edge::new(v, w));
                self.adjacency.sub(w, 1);
                self.changed.mark(w);
                common += 1;
            }
        }
        self.adjacency.sub(u, common);
        self.adjacency.sub(v, common);
        self.changed.mark(u);
        self.changed.mark(v);
    }

    /// Drop every trace of an isolated-or-about-to-be-removed node.
    fn forget_node(&mut self, id: NodeId) {
        self.classifier.remove(id);
        self.adjacency.remove(id);
        self.changed.unmark(id);
        self.graph.erase_node(id);
        self.log_weights.remove(&id);
    }
}
