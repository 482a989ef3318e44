//! ElimError: Unified error type for simplicial-set public APIs
//!
//! Every precondition is checked before any bookkeeping starts, so an
//! operation that returns an error leaves the graph, the weights and all
//! derived counters exactly as they were.

use thiserror::Error;

use crate::elimination::classifier::Classification;
use crate::graph::node::{Edge, NodeId};

/// Unified error type for simplicial-set operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ElimError {
    /// A collaborator or configuration value cannot be used.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The node does not belong to the graph.
    #[error("Node {0} does not belong to the graph")]
    NodeNotFound(NodeId),
    /// The edge does not belong to the graph.
    #[error("Edge {0} does not belong to the graph")]
    EdgeNotFound(Edge),
    /// `erase_clique` was called on a node whose neighbourhood is not a clique.
    #[error("Node {0} is not a clique")]
    NotAClique(NodeId),
    /// No node of the requested class is currently eligible.
    #[error("No {0} node could be found")]
    NoCandidate(Classification),
    /// A derived counter or queue disagrees with the graph.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

impl ElimError {
    /// True for the "requested item is absent" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ElimError::NodeNotFound(_)
                | ElimError::EdgeNotFound(_)
                | ElimError::NotAClique(_)
                | ElimError::NoCandidate(_)
        )
    }
}
