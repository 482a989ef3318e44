//! Incrementally maintained simplicial / almost-simplicial / quasi-simplicial
//! node sets.
//!
//! A [`SimplicialSet`] borrows an undirected graph together with the
//! log-modality and log-weight maps of its nodes, and answers the question a
//! greedy triangulation driver keeps asking: "which node should be
//! eliminated next?". It keeps, for every edge, the number of triangles
//! through it and, for every node, the number of adjacent neighbour pairs.
//! Those counters are updated locally by every mutation, and the nodes they
//! touch are recorded as stale. Classification is recomputed lazily, only for
//! stale nodes, when a query needs it.
//!
//! # Example
//! ```rust
//! use simplicial_set::elimination::{SimplicialConfig, SimplicialSet};
//! use simplicial_set::graph::{NodeId, NodeProperty, UndiGraph};
//!
//! let n = NodeId::new;
//! let mut graph = UndiGraph::from_edges([(n(1), n(2)), (n(2), n(3)), (n(1), n(3)), (n(3), n(4))]);
//! let mods: NodeProperty<f64> = (1..=4).map(|i| (n(i), 2f64.ln())).collect();
//! let mut weights = NodeProperty::new();
//!
//! let mut set = SimplicialSet::new(&mut graph, &mods, &mut weights, SimplicialConfig::default())?;
//! assert!(set.has_simplicial_node());
//! let best = set.best_simplicial_node()?;
//! set.erase_clique(best)?;
//! # Ok::<(), simplicial_set::elim_error::ElimError>(())
//! ```

mod invariants;
mod mutation;
mod refresh;

#[cfg(test)]
mod tests;

use crate::elim_error::ElimError;
use crate::graph::{Edge, EdgeSet, NodeId, NodeProperty, UndirectedGraph};

use super::change_tracker::ChangeTracker;
use super::classifier::{Classification, NodeClassifier};
use super::config::SimplicialConfig;
use super::counters::{AdjacencyCounter, TriangleCounter, count_triangles};

/// Elimination candidates of a graph, maintained under graph mutations.
///
/// The graph and the log-weights are borrowed mutably for `'g`: all edits
/// must go through this type while it is alive, which keeps the derived
/// counters in sync with the graph.
#[derive(Debug)]
pub struct SimplicialSet<'g, G: UndirectedGraph> {
    graph: &'g mut G,
    log_modalities: &'g NodeProperty<f64>,
    log_weights: &'g mut NodeProperty<f64>,
    triangles: TriangleCounter,
    adjacency: AdjacencyCounter,
    classifier: NodeClassifier,
    changed: ChangeTracker,
    /// Lower bound on the log tree width reached so far.
    log_tree_width: f64,
    log_threshold: f64,
    config: SimplicialConfig,
    record_fill_ins: bool,
    fill_ins: EdgeSet,
}

#[inline]
fn modality(mods: &NodeProperty<f64>, n: NodeId) -> f64 {
    mods.get(&n).copied().unwrap_or(0.0)
}

/// Every graph node needs a log-modality and the configuration must be sound.
fn check_collaborators<G: UndirectedGraph>(
    graph: &G,
    log_modalities: &NodeProperty<f64>,
    config: &SimplicialConfig,
) -> Result<(), ElimError> {
    config.validate()?;
    if let Some(n) = graph.nodes().find(|n| !log_modalities.contains_key(n)) {
        return Err(ElimError::InvalidArgument(format!(
            "node {n} has no log-modality"
        )));
    }
    Ok(())
}

impl<'g, G: UndirectedGraph> SimplicialSet<'g, G> {
    /// Build the simplicial set of `graph`.
    ///
    /// Every entry of `log_weights` for a graph node is overwritten with the
    /// node's log-modality plus those of its neighbours.
    ///
    /// # Errors
    /// [`ElimError::InvalidArgument`] if a node lacks a log-modality or the
    /// configuration is invalid.
    pub fn new(
        graph: &'g mut G,
        log_modalities: &'g NodeProperty<f64>,
        log_weights: &'g mut NodeProperty<f64>,
        config: SimplicialConfig,
    ) -> Result<Self, ElimError> {
        check_collaborators(&*graph, log_modalities, &config)?;
        let mut set = Self {
            graph,
            log_modalities,
            log_weights,
            triangles: TriangleCounter::default(),
            adjacency: AdjacencyCounter::default(),
            classifier: NodeClassifier::default(),
            changed: ChangeTracker::default(),
            log_tree_width: f64::INFINITY,
            log_threshold: 0.0,
            config,
            record_fill_ins: false,
            fill_ins: EdgeSet::new(),
        };
        set.initialize();
        Ok(set)
    }

    /// Rebind to another graph and weight maps and rebuild everything.
    ///
    /// On error the current state is left untouched.
    pub fn set_graph(
        &mut self,
        graph: &'g mut G,
        log_modalities: &'g NodeProperty<f64>,
        log_weights: &'g mut NodeProperty<f64>,
        config: SimplicialConfig,
    ) -> Result<(), ElimError> {
        check_collaborators(&*graph, log_modalities, &config)?;
        self.graph = graph;
        self.log_modalities = log_modalities;
        self.log_weights = log_weights;
        self.config = config;
        self.initialize();
        Ok(())
    }

    /// Swap the log-weight map the set writes to, returning the previous one.
    ///
    /// The new map must already hold the current weight of every node.
    pub fn replace_log_weights(
        &mut self,
        new_weights: &'g mut NodeProperty<f64>,
    ) -> Result<&'g mut NodeProperty<f64>, ElimError> {
        if let Some(n) = self.graph.nodes().find(|n| !new_weights.contains_key(n)) {
            return Err(ElimError::InvalidArgument(format!(
                "replacement weights have no entry for node {n}"
            )));
        }
        Ok(std::mem::replace(&mut self.log_weights, new_weights))
    }

    fn initialize(&mut self) {
        let mods = self.log_modalities;
        let n_nodes = self.graph.node_count();
        self.log_threshold = self.config.log_threshold();
        self.log_tree_width = f64::INFINITY;
        self.classifier = NodeClassifier::with_capacity(n_nodes);
        self.changed = ChangeTracker::with_capacity(n_nodes);
        self.fill_ins.clear();

        for x in self.graph.nodes() {
            let w = modality(mods, x)
                + self
                    .graph
                    .neighbours(x)
                    .map(|y| modality(mods, y))
                    .sum::<f64>();
            self.log_weights.insert(x, w);
            self.log_tree_width = self.log_tree_width.min(w);
            self.classifier.register(x);
            self.changed.mark(x);
        }

        let (triangles, adjacency) = count_triangles(&*self.graph);
        self.triangles = triangles;
        self.adjacency = adjacency;
        log::debug!(
            "simplicial set initialised: {} nodes, {} edges, log tree width {:.4}",
            n_nodes,
            self.graph.edge_count(),
            self.log_tree_width
        );
    }

    #[inline]
    fn weight(&self, n: NodeId) -> f64 {
        self.log_weights.get(&n).copied().unwrap_or(0.0)
    }

    // ---------- Read-only accessors ----------

    pub fn graph(&self) -> &G {
        &*self.graph
    }

    pub fn log_modalities(&self) -> &NodeProperty<f64> {
        self.log_modalities
    }

    pub fn log_weights(&self) -> &NodeProperty<f64> {
        &*self.log_weights
    }

    pub fn config(&self) -> &SimplicialConfig {
        &self.config
    }

    /// Running lower bound on the log tree width: the smallest initial
    /// log-weight, raised by the log-weight of every node erased as a clique.
    pub fn log_tree_width(&self) -> f64 {
        self.log_tree_width
    }

    /// Triangles through `edge`, `None` if the edge is absent.
    pub fn triangle_count(&self, edge: Edge) -> Option<usize> {
        self.triangles.get(edge)
    }

    /// Adjacent neighbour pairs of `n`, `None` if the node is absent.
    pub fn adjacent_neighbour_count(&self, n: NodeId) -> Option<usize> {
        self.adjacency.get(n)
    }

    /// Current class of `n` without refreshing it. Stale nodes may report an
    /// outdated class; use the `is_*` queries for an up-to-date answer.
    pub fn classification(&self, n: NodeId) -> Option<Classification> {
        self.classifier.membership(n)
    }

    /// Is the class of `n` possibly outdated?
    pub fn is_stale(&self, n: NodeId) -> bool {
        self.changed.contains(n)
    }

    // ---------- Fill-ins ----------

    /// Start or stop recording the edges added by [`make_clique`](Self::make_clique).
    /// Stopping discards the record.
    pub fn set_fill_ins(&mut self, on: bool) {
        self.record_fill_ins = on;
        if !on {
            self.fill_ins.clear();
        }
    }

    /// Edges added by `make_clique` since recording started.
    pub fn fill_ins(&self) -> &EdgeSet {
        &self.fill_ins
    }
}
