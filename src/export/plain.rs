//! Plain text export: `"<interventions> <longest_chain>"` on one line.

use super::{Exporter, Report};
use std::io::{self, Write};

/// Plain text exporter implementation.
pub struct PlainExporter;

impl Exporter for PlainExporter {
    fn export<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", report.solution)
    }
}
