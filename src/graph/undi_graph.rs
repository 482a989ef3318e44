//! In-memory implementation of the [`UndirectedGraph`] trait.
//!
//! [`UndiGraph`] stores one neighbour set per node in a hash map. Both
//! directions of every edge are kept, so `neighbours` is a single lookup.

use hashbrown::{HashMap, HashSet};

use super::node::{Edge, NodeId};
use super::property::NodeSet;
use super::undirected::UndirectedGraph;

/// An undirected simple graph backed by hash-set adjacency.
#[derive(Clone, Debug, Default)]
pub struct UndiGraph {
    /// Neighbour set of every node; mirrors are always present.
    adjacency: HashMap<NodeId, NodeSet>,
    n_edges: usize,
}

impl UndiGraph {
    /// Creates a new, empty `UndiGraph`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an edge list, creating endpoints on the fly.
    /// Self-loops are ignored.
    ///
    /// # Example
    /// ```rust
    /// use simplicial_set::graph::{NodeId, UndiGraph, UndirectedGraph};
    /// let g = UndiGraph::from_edges([(1, 2), (2, 3)].map(|(a, b)| (NodeId::new(a), NodeId::new(b))));
    /// assert_eq!(g.node_count(), 3);
    /// assert_eq!(g.degree(NodeId::new(2)), 2);
    /// ```
    pub fn from_edges<I: IntoIterator<Item = (NodeId, NodeId)>>(edges: I) -> Self {
        let mut g = Self::default();
        for (u, v) in edges {
            g.add_node(u);
            g.add_node(v);
            g.add_edge(u, v);
        }
        g
    }

    /// Insert an isolated node. Returns `false` if it already existed.
    pub fn add_node(&mut self, n: NodeId) -> bool {
        if self.adjacency.contains_key(&n) {
            return false;
        }
        self.adjacency.insert(n, HashSet::new());
        true
    }

    /// Check mirror symmetry and the cached edge count (debug builds only).
    pub fn debug_assert_consistent(&self) {
        let mut halves = 0usize;
        for (u, nbrs) in &self.adjacency {
            debug_assert!(!nbrs.contains(u), "self-loop on {u}");
            for v in nbrs {
                let ok = self.adjacency.get(v).is_some_and(|back| back.contains(u));
                debug_assert!(ok, "missing mirror {v} -> {u}");
            }
            halves += nbrs.len();
        }
        debug_assert_eq!(halves, 2 * self.n_edges, "edge count out of sync");
    }
}

impl UndirectedGraph for UndiGraph {
    type NodeIter<'a> = std::iter::Copied<hashbrown::hash_map::Keys<'a, NodeId, NodeSet>>;
    type NeighbourIter<'a> = std::iter::Flatten<
        std::option::IntoIter<std::iter::Copied<hashbrown::hash_set::Iter<'a, NodeId>>>,
    >;

    fn nodes(&self) -> Self::NodeIter<'_> {
        self.adjacency.keys().copied()
    }

    fn neighbours(&self, n: NodeId) -> Self::NeighbourIter<'_> {
        self.adjacency
            .get(&n)
            .map(|nbrs| nbrs.iter().copied())
            .into_iter()
            .flatten()
    }

    #[inline]
    fn degree(&self, n: NodeId) -> usize {
        self.adjacency.get(&n).map_or(0, |nbrs| nbrs.len())
    }

    #[inline]
    fn exists(&self, n: NodeId) -> bool {
        self.adjacency.contains_key(&n)
    }

    #[inline]
    fn exists_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency.get(&u).is_some_and(|nbrs| nbrs.contains(&v))
    }

    fn add_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        if u == v || !self.exists(u) || !self.exists(v) || self.exists_edge(u, v) {
            return false;
        }
        if let Some(nbrs) = self.adjacency.get_mut(&u) {
            nbrs.insert(v);
        }
        if let Some(nbrs) = self.adjacency.get_mut(&v) {
            nbrs.insert(u);
        }
        self.n_edges += 1;
        true
    }

    fn erase_edge(&mut self, edge: Edge) -> bool {
        let (u, v) = edge.endpoints();
        let removed = self
            .adjacency
            .get_mut(&u)
            .is_some_and(|nbrs| nbrs.remove(&v));
        if !removed {
            return false;
        }
        if let Some(nbrs) = self.adjacency.get_mut(&v) {
            nbrs.remove(&u);
        }
        self.n_edges -= 1;
        true
    }

    fn erase_node(&mut self, n: NodeId) -> bool {
        let Some(nbrs) = self.adjacency.remove(&n) else {
            return false;
        };
        for v in &nbrs {
            if let Some(back) = self.adjacency.get_mut(v) {
                back.remove(&n);
            }
        }
        self.n_edges -= nbrs.len();
        true
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.n_edges
    }
}
