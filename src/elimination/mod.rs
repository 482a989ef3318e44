//! Elimination-candidate bookkeeping for greedy triangulation.
//!
//! The building blocks are exported individually; most users only need
//! [`SimplicialSet`] and [`SimplicialConfig`].

pub mod change_tracker;
pub mod classifier;
pub mod config;
pub mod counters;
pub mod priority;
pub mod simplicial;

pub use change_tracker::ChangeTracker;
pub use classifier::{Classification, NodeClassifier};
pub use config::SimplicialConfig;
pub use counters::{AdjacencyCounter, TriangleCounter, count_triangles};
pub use priority::NodePriorityQueue;
pub use simplicial::SimplicialSet;
