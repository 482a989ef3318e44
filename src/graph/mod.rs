//! Undirected graph abstractions consumed by the elimination core.
//!
//! This module provides:
//! - [`NodeId`] and [`Edge`] handles
//! - the [`UndirectedGraph`] trait the core is written against
//! - [`UndiGraph`], a hash-map backed implementation
//! - property map aliases for per-node weights and per-edge counters

pub mod node;
pub mod property;
pub mod undi_graph;
pub mod undirected;

pub use node::{Edge, NodeId};
pub use property::{EdgeProperty, EdgeSet, NodeProperty, NodeSet};
pub use undi_graph::UndiGraph;
pub use undirected::UndirectedGraph;
