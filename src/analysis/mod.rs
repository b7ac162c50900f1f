//! End-to-end analysis of a domino placement.
//!
//! Reads an edge list, builds the graph, orders it and solves it.
//!
//! # Example
//!
//! ```
//! use domino_chain::analysis::analyze_str;
//! use domino_chain::parser::InputMode;
//!
//! let report = analyze_str("4 4\n1 2\n1 3\n2 4\n3 4\n", InputMode::Counted).unwrap();
//! assert_eq!(report.solution.to_string(), "1 3");
//! ```

use std::io::BufRead;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, instrument};

use crate::export::Report;
use crate::graph::DominoGraph;
use crate::parser::{self, EdgeList, InputMode};
use crate::solver;

/// Solves an already parsed edge list.
pub fn analyze_edges(list: EdgeList) -> Report {
    let mut graph = list.into_graph();
    analyze_graph(&mut graph)
}

/// Solves a built graph and reports its size alongside the solution.
pub fn analyze_graph(graph: &mut DominoGraph) -> Report {
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        sources = graph.source_count(),
        "built domino graph"
    );

    let order = graph.topological_order();
    let solution = solver::solve(graph, &order);

    Report {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        solution,
    }
}

/// Reads an edge list from `reader` and solves it.
#[instrument(skip(reader))]
pub fn analyze<R: BufRead>(reader: R, mode: InputMode) -> anyhow::Result<Report> {
    let list = parser::parse_reader(reader, mode).context("Failed to parse edge list")?;
    Ok(analyze_edges(list))
}

/// Parses `content` and solves it.
pub fn analyze_str(content: &str, mode: InputMode) -> anyhow::Result<Report> {
    let list = parser::parse_str(content, mode).context("Failed to parse edge list")?;
    Ok(analyze_edges(list))
}

/// Reads an edge list from a file and solves it.
#[instrument]
pub fn analyze_file(path: &Path, mode: InputMode) -> anyhow::Result<Report> {
    let list = parser::parse_file(path, mode)
        .with_context(|| format!("Failed to parse edge list from {}", path.display()))?;
    Ok(analyze_edges(list))
}
