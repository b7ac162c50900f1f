//! Parser module for domino-chain input.
//!
//! Reads the node count and the `parent child` edge list a graph is built
//! from. Input is passed in explicitly (string, reader or path); nothing is
//! read from ambient process state.
//!
//! # Example
//!
//! ```
//! use domino_chain::parser::{parse_str, InputMode};
//!
//! let graph = parse_str("3 2\n1 2\n2 3\n", InputMode::Counted)
//!     .unwrap()
//!     .into_graph();
//!
//! assert_eq!(graph.source_count(), 1);
//! ```

pub mod edge_list;

pub use edge_list::{
    parse_file, parse_reader, parse_str, EdgeList, InputMode, ParseError, ParseResult, MAX_NODES,
};
