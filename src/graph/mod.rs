//! Graph module for domino placement modeling.
//!
//! This module provides the [`DominoGraph`] struct, which records which
//! piece knocks over which, and the topological ordering the solver runs on.
//!
//! # Example
//!
//! ```rust
//! use domino_chain::graph::DominoGraph;
//!
//! let mut graph = DominoGraph::new(3);
//! graph.add_edge(1, 2);
//! graph.add_edge(1, 3);
//!
//! assert_eq!(graph.source_count(), 1);
//! assert_eq!(graph.topological_order(), vec![1, 2, 3]);
//! ```

mod domino_graph;
mod topological;

pub use domino_graph::{Color, DominoGraph, NodeId, NodeInfo};

/// Creates a graph of `nodes` pieces with no edges.
pub fn build_graph(nodes: usize) -> DominoGraph {
    DominoGraph::new(nodes)
}
