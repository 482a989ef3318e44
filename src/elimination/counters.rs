//! Triangle bookkeeping: triangles per edge and adjacent neighbour pairs per
//! node.
//!
//! Both counters are derived from the graph and maintained incrementally by
//! [`SimplicialSet`](super::SimplicialSet). [`count_triangles`] rebuilds them
//! from scratch and is used at (re)initialisation and by invariant checks.

use itertools::Itertools;

use crate::graph::{Edge, EdgeProperty, NodeId, NodeProperty, UndirectedGraph};

/// Number of triangles going through every edge of the graph.
///
/// An entry exists iff the edge exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriangleCounter {
    counts: EdgeProperty<usize>,
}

impl TriangleCounter {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            counts: EdgeProperty::with_capacity(cap),
        }
    }

    #[inline]
    pub fn get(&self, edge: Edge) -> Option<usize> {
        self.counts.get(&edge).copied()
    }

    /// Count for `edge`, 0 when the edge is unknown.
    #[inline]
    pub fn count(&self, edge: Edge) -> usize {
        self.get(edge).unwrap_or(0)
    }

    #[inline]
    pub fn insert(&mut self, edge: Edge, count: usize) {
        self.counts.insert(edge, count);
    }

    #[inline]
    pub fn remove(&mut self, edge: Edge) -> Option<usize> {
        self.counts.remove(&edge)
    }

    #[inline]
    pub fn increment(&mut self, edge: Edge) {
        *self.counts.entry(edge).or_insert(0) += 1;
    }

    #[inline]
    pub fn decrement(&mut self, edge: Edge) {
        if let Some(c) = self.counts.get_mut(&edge) {
            debug_assert!(*c > 0, "triangle count of {edge} would underflow");
            *c = c.saturating_sub(1);
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Edge, usize)> + '_ {
        self.counts.iter().map(|(&e, &c)| (e, c))
    }
}

/// Number of mutually adjacent neighbour pairs of every node.
///
/// A node `n` is simplicial iff its count equals `C(deg(n), 2)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyCounter {
    counts: NodeProperty<usize>,
}

impl AdjacencyCounter {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            counts: NodeProperty::with_capacity(cap),
        }
    }

    #[inline]
    pub fn get(&self, n: NodeId) -> Option<usize> {
        self.counts.get(&n).copied()
    }

    #[inline]
    pub fn count(&self, n: NodeId) -> usize {
        self.get(n).unwrap_or(0)
    }

    #[inline]
    pub fn insert(&mut self, n: NodeId, count: usize) {
        self.counts.insert(n, count);
    }

    #[inline]
    pub fn remove(&mut self, n: NodeId) -> Option<usize> {
        self.counts.remove(&n)
    }

    #[inline]
    pub fn add(&mut self, n: NodeId, delta: usize) {
        *self.counts.entry(n).or_insert(0) += delta;
    }

    #[inline]
    pub fn sub(&mut self, n: NodeId, delta: usize) {
        if let Some(c) = self.counts.get_mut(&n) {
            debug_assert!(*c >= delta, "adjacent pair count of {n} would underflow");
            *c = c.saturating_sub(delta);
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.counts.iter().map(|(&n, &c)| (n, c))
    }
}

/// `C(k, 2)`: number of unordered pairs among `k` items.
#[inline]
pub const fn pairs(k: usize) -> usize {
    if k < 2 { 0 } else { k * (k - 1) / 2 }
}

/// Count every triangle of `graph` once and derive both counters.
///
/// For each node `x`, only neighbours with a larger id are paired, so the
/// triangle `x-y-z` is seen exactly once, from its smallest node.
pub fn count_triangles<G: UndirectedGraph>(graph: &G) -> (TriangleCounter, AdjacencyCounter) {
    let mut triangles = TriangleCounter::with_capacity(graph.edge_count());
    let mut adjacency = AdjacencyCounter::with_capacity(graph.node_count());

    for x in graph.nodes() {
        adjacency.insert(x, 0);
        for y in graph.neighbours(x).filter(|&y| y > x) {
            triangles.insert(Edge::new(x, y), 0);
        }
    }

    let mut higher: Vec<NodeId> = Vec::new();
    for x in graph.nodes() {
        higher.clear();
        higher.extend(graph.neighbours(x).filter(|&y| y > x));
        for (&y, &z) in higher.iter().tuple_combinations() {
            if graph.exists_edge(y, z) {
                triangles.increment(Edge::new(x, y));
                triangles.increment(Edge::new(x, z));
                triangles.increment(Edge::new(y, z));
                adjacency.add(x, 1);
                adjacency.add(y, 1);
                adjacency.add(z, 1);
            }
        }
    }
    (triangles, adjacency)
}
