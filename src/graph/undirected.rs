//! The undirected graph interface consumed by the elimination core.

use super::node::{Edge, NodeId};

/// Mutable undirected simple graph.
///
/// [`SimplicialSet`](crate::elimination::SimplicialSet) holds an implementor
/// by `&mut` for its whole lifetime and is the only party mutating it while
/// that borrow is alive, so the graph and the derived counters cannot drift
/// apart.
///
/// Implementors must reject self-loops and parallel edges: `neighbours(n)`
/// never yields `n` and never yields the same node twice.
pub trait UndirectedGraph {
    /// Iterator over all nodes.
    type NodeIter<'a>: Iterator<Item = NodeId> + 'a
    where
        Self: 'a;
    /// Iterator over the neighbours of one node.
    type NeighbourIter<'a>: Iterator<Item = NodeId> + 'a
    where
        Self: 'a;

    /// All nodes of the graph, in unspecified order.
    fn nodes(&self) -> Self::NodeIter<'_>;

    /// Neighbours of `n` (empty when `n` is absent).
    fn neighbours(&self, n: NodeId) -> Self::NeighbourIter<'_>;

    /// Number of neighbours of `n` (0 when `n` is absent).
    fn degree(&self, n: NodeId) -> usize;

    /// Does `n` belong to the graph?
    fn exists(&self, n: NodeId) -> bool;

    /// Does the edge `u`–`v` belong to the graph?
    fn exists_edge(&self, u: NodeId, v: NodeId) -> bool;

    /// Insert the edge `u`–`v`. Returns `false` if it already existed, if it
    /// is a self-loop, or if an endpoint is missing.
    fn add_edge(&mut self, u: NodeId, v: NodeId) -> bool;

    /// Remove `edge`. Returns `false` if it was absent.
    fn erase_edge(&mut self, edge: Edge) -> bool;

    /// Remove `n` and all incident edges. Returns `false` if it was absent.
    fn erase_node(&mut self, n: NodeId) -> bool;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    // ---------- Convenience queries ----------

    /// Does `edge` belong to the graph?
    #[inline]
    fn contains_edge(&self, edge: Edge) -> bool {
        self.exists_edge(edge.first(), edge.second())
    }

    /// Every edge exactly once, smaller id first.
    fn edges(&self) -> Vec<Edge> {
        let mut out = Vec::with_capacity(self.edge_count());
        for u in self.nodes() {
            out.extend(self.neighbours(u).filter(|&v| u < v).map(|v| Edge::new(u, v)));
        }
        out
    }
}
