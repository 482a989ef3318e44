#![allow(dead_code)]
use simplicial_set::prelude::*;

pub fn nid(u: u64) -> NodeId {
    NodeId::new(u)
}

/// Build a graph from an undirected edge list.
pub fn graph_from(edges: &[(u64, u64)]) -> UndiGraph {
    UndiGraph::from_edges(edges.iter().map(|&(u, v)| (nid(u), nid(v))))
}

/// Same log-modality on every node of `g`.
pub fn uniform_modalities(g: &UndiGraph, value: f64) -> NodeProperty<f64> {
    g.nodes().map(|n| (n, value)).collect()
}

/// Number of mutually adjacent neighbour pairs of `n`, straight from the graph.
pub fn brute_adjacent_pairs(g: &UndiGraph, n: NodeId) -> usize {
    let nbrs: Vec<NodeId> = g.neighbours(n).collect();
    let mut count = 0;
    for (i, &a) in nbrs.iter().enumerate() {
        for &b in &nbrs[i + 1..] {
            if g.exists_edge(a, b) {
                count += 1;
            }
        }
    }
    count
}

/// Number of triangles through `e`, straight from the graph.
pub fn brute_triangles(g: &UndiGraph, e: Edge) -> usize {
    g.neighbours(e.first())
        .filter(|&w| g.exists_edge(e.second(), w))
        .count()
}

/// Is `order` a perfect elimination ordering of `g`? Each node's later
/// neighbours must be pairwise adjacent.
pub fn is_perfect_elimination_ordering(g: &UndiGraph, order: &[NodeId]) -> bool {
    let pos: std::collections::HashMap<NodeId, usize> =
        order.iter().enumerate().map(|(i, &n)| (n, i)).collect();
    order.iter().all(|&v| {
        let later: Vec<NodeId> = g.neighbours(v).filter(|w| pos[w] > pos[&v]).collect();
        later
            .iter()
            .enumerate()
            .all(|(i, &a)| later[i + 1..].iter().all(|&b| g.exists_edge(a, b)))
    })
}
