use std::env;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use domino_chain::analysis;
use domino_chain::export::{self, ReportFormat};
use domino_chain::parser::InputMode;

#[derive(Parser)]
#[command(name = "domino-chain")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Minimum pushes and longest chain reaction over a DAG of domino pieces", long_about = None)]
struct Cli {
    /// Edge list to read (defaults to standard input)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Read `parent child` pairs until end of input instead of trusting the edge count
    #[arg(short, long)]
    stream: bool,

    /// Output format: plain or json
    #[arg(short, long, default_value = "plain")]
    format: ReportFormat,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DOMINO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let format = env::var("DOMINO_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mode = if cli.stream {
        InputMode::Stream
    } else {
        InputMode::Counted
    };

    let report = match &cli.input {
        Some(path) => analysis::analyze_file(path, mode)?,
        None => analysis::analyze(io::stdin().lock(), mode)?,
    };
    info!(
        interventions = report.solution.interventions,
        longest_chain = report.solution.longest_chain,
        "analysis complete"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    export::export(cli.format, &report, &mut out).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(())
}
