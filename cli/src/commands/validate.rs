//! `codegraph validate`.

use std::io::Write;

use anyhow::{Context, Result};
use codegraph_constraint::{validate, ValidationReport};
use codegraph_core::messages::{VALIDATION_FAIL, VALIDATION_OK};
use codegraph_graph::Graph;
use codegraph_parser::layout::Layout;
use codegraph_parser::{load_graph_parts, load_schema};

use crate::args::ValidateArgs;
use crate::Exit;

/// Validate a codegraph directory.
///
/// Every document is required; a missing one aborts before any check runs.
pub fn run(args: &ValidateArgs, out: &mut dyn Write, err: &mut dyn Write) -> Result<Exit> {
    let dir = &args.codegraph_dir;
    let layout = Layout::new(dir);

    let schema = load_schema(&layout.schema)?;
    let parts = load_graph_parts(dir)?;
    let graph = Graph::new(parts.nodes, parts.edges);
    let report = validate(&schema, &graph);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        writeln!(out, "{json}")?;
    } else {
        write_text(&report, &layout, out, err)?;
    }

    Ok(if report.is_ok() { Exit::Ok } else { Exit::Fail })
}

fn write_text(
    report: &ValidationReport,
    layout: &Layout,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> std::io::Result<()> {
    match report {
        ValidationReport::Ok { summary } => {
            writeln!(out, "{VALIDATION_OK}")?;
            writeln!(out, "- nodes: {}", summary.nodes)?;
            writeln!(out, "- edges: {}", summary.edges)?;
        }
        ValidationReport::Fail { violations } => {
            writeln!(err, "{VALIDATION_FAIL}")?;
            for message in violations.render(&layout.edges) {
                writeln!(err, "- {message}")?;
            }
        }
    }
    Ok(())
}
