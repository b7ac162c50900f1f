//! domino-chain - minimum pushes and longest chain reaction over a DAG of
//! domino pieces
//!
//! Pieces are nodes and "knocks over" relations are directed edges. The
//! crate counts the pieces nobody knocks over (each needs a push of its own)
//! and finds the longest chain of pieces that fall one after another.

pub mod analysis;
pub mod export;
pub mod graph;
pub mod parser;
pub mod solver;

pub use graph::{build_graph, DominoGraph, NodeId};
pub use solver::{solve, Solution};
