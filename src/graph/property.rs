//! Per-node and per-edge property maps.
//!
//! The log-modality and log-weight collaborators of
//! [`SimplicialSet`](crate::elimination::SimplicialSet) are plain
//! `NodeProperty<f64>` maps owned by the caller.

use hashbrown::{HashMap, HashSet};

use super::node::{Edge, NodeId};

/// Value attached to every node of a graph.
pub type NodeProperty<T> = HashMap<NodeId, T>;

/// Value attached to every edge of a graph.
pub type EdgeProperty<T> = HashMap<Edge, T>;

/// Set of nodes.
pub type NodeSet = HashSet<NodeId>;

/// Set of edges.
pub type EdgeSet = HashSet<Edge>;
