//! JSON export implementation.
//!
//! Exports the solution together with the size of the input graph.

use super::{Exporter, Report};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Graph size for JSON output.
#[derive(Serialize)]
struct JsonGraph {
    nodes: usize,
    edges: usize,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport {
    interventions: usize,
    longest_chain: usize,
    graph: JsonGraph,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()> {
        let export = JsonExport {
            interventions: report.solution.interventions,
            longest_chain: report.solution.longest_chain,
            graph: JsonGraph {
                nodes: report.nodes,
                edges: report.edges,
            },
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
