//! `NodeId` and `Edge`: the handles of an undirected graph
//!
//! Every node of the graph is represented by an opaque identifier. `NodeId`
//! wraps a `u64`; ordering on ids is only used to count every triangle once
//! and to break ties between equally weighted nodes.
//!
//! `Edge` is an unordered pair of distinct nodes, stored normalised so that
//! `Edge::new(a, b) == Edge::new(b, a)` and both hash identically.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque node identifier.
///
/// This type is `repr(transparent)` and costs exactly one `u64`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new `NodeId` from a raw `u64` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use simplicial_set::graph::node::NodeId;
    /// let n = NodeId::new(1);
    /// assert_eq!(n.get(), 1);
    /// ```
    #[inline]
    pub const fn new(raw: u64) -> Self {
        NodeId(raw)
    }

    /// Returns the inner `u64` value of this `NodeId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Displays as `NodeId(raw_value)`.
impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.0).finish()
    }
}

/// Prints the numeric id without any wrapper text.
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unordered pair of nodes.
///
/// The smaller id is always stored first. Deserialisation goes through
/// [`Edge::new`], so `{"first": 4, "second": 3}` reads back as `(3, 4)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawEdge")]
pub struct Edge {
    first: NodeId,
    second: NodeId,
}

/// Wire shape of an [`Edge`] before normalisation.
#[derive(Deserialize)]
struct RawEdge {
    first: NodeId,
    second: NodeId,
}

impl From<RawEdge> for Edge {
    fn from(raw: RawEdge) -> Self {
        Edge::new(raw.first, raw.second)
    }
}

impl Edge {
    /// Build the edge joining `a` and `b`, in either order.
    #[inline]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Edge { first: a, second: b }
        } else {
            Edge { first: b, second: a }
        }
    }

    /// Endpoint with the smaller id.
    #[inline]
    pub fn first(&self) -> NodeId {
        self.first
    }

    /// Endpoint with the larger id.
    #[inline]
    pub fn second(&self) -> NodeId {
        self.second
    }

    /// Both endpoints, smaller id first.
    #[inline]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.first, self.second)
    }
}

impl From<(NodeId, NodeId)> for Edge {
    #[inline]
    fn from((a, b): (NodeId, NodeId)) -> Self {
        Edge::new(a, b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
