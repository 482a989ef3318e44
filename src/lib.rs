//! # simplicial-set
//!
//! simplicial-set maintains, under arbitrary graph mutations, the
//! classification of the nodes of an undirected graph into simplicial,
//! almost-simplicial and quasi-simplicial candidates. Greedy triangulation
//! drivers (junction-tree construction, fill-in minimising elimination
//! orderings) repeatedly ask it for the lightest candidate, eliminate it and
//! let the set update itself locally.
//!
//! ## Features
//! - Per-edge triangle counts and per-node adjacent-pair counts maintained
//!   incrementally by `add_edge`, `erase_edge`, `erase_node`, `erase_clique`
//!   and `make_clique`
//! - Lazy re-classification: only nodes touched since the last query are
//!   re-examined
//! - Log-weight ordered candidate queues with deterministic tie-breaking
//! - Optional fill-in recording
//! - Invariant validation against a from-scratch recount
//!   (`check-invariants` feature runs it after every mutation)
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! simplicial-set = "0.1"
//! # Optional features:
//! # features = ["check-invariants"]
//! ```
//!
//! ## Ownership
//! A [`SimplicialSet`](elimination::SimplicialSet) borrows the graph and the
//! log-weight map mutably for its whole lifetime. Every edit must go through
//! it, so the derived counters can never drift from the graph.

pub mod debug_invariants;
pub mod elim_error;
pub mod elimination;
pub mod graph;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::elim_error::ElimError;
    pub use crate::elimination::{Classification, SimplicialConfig, SimplicialSet};
    pub use crate::graph::{
        Edge, EdgeProperty, EdgeSet, NodeId, NodeProperty, NodeSet, UndiGraph, UndirectedGraph,
    };
}
