//! `codegraph triage`.

use std::io::Write;

use anyhow::{Context, Result};
use codegraph_graph::Graph;
use codegraph_parser::layout::Layout;
use codegraph_parser::{load_graph_parts, load_label_map};
use codegraph_registry::LabelMap;
use codegraph_triage::{render_json, render_report, triage};

use crate::args::TriageArgs;
use crate::Exit;

/// Rank the functions of a codegraph directory.
///
/// Always exits successfully once the documents are read; an empty ranking is
/// reported, not treated as a failure.
pub fn run(args: &TriageArgs, out: &mut dyn Write) -> Result<Exit> {
    let dir = &args.codegraph_dir;
    let layout = Layout::new(dir);

    let label_map = if args.no_label_map {
        LabelMap::new()
    } else {
        load_label_map(&layout.schema)?
    };
    let labels = args.labels().resolved_with(&label_map);
    let config = args.config(labels);

    let parts = load_graph_parts(dir)?;
    let graph = Graph::new(parts.nodes, parts.edges);
    let ranked = triage(&graph, &config);

    if args.json {
        let json = render_json(&ranked).context("failed to encode triage entries")?;
        writeln!(out, "{json}")?;
    } else {
        for line in render_report(&ranked) {
            writeln!(out, "{line}")?;
        }
    }

    Ok(Exit::Ok)
}
