//! Export functionality for solved domino graphs.
//!
//! This module provides exporters for printing a [`Report`] either as the
//! single `"<interventions> <longest_chain>"` line or as JSON.

pub mod json;
pub mod plain;

use crate::solver::Solution;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One line: interventions and longest chain separated by a space
    #[default]
    Plain,
    /// JSON format - machine-readable, includes graph size
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(ReportFormat::Plain),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown report format: '{}'. Valid formats: plain, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Plain => write!(f, "plain"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Everything known after solving one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Number of pieces in the input
    pub nodes: usize,
    /// Number of edges in the input, duplicates included
    pub edges: usize,
    pub solution: Solution,
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the report to the given writer.
    fn export<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()>;
}

/// Export a report in the specified format.
pub fn export<W: Write>(format: ReportFormat, report: &Report, writer: &mut W) -> io::Result<()> {
    match format {
        ReportFormat::Plain => plain::PlainExporter.export(report, writer),
        ReportFormat::Json => json::JsonExporter.export(report, writer),
    }
}

/// Export a report to a string.
pub fn export_to_string(format: ReportFormat, report: &Report) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
