//! Codegraph Triage
//!
//! Rank function nodes by value exposure and privilege, to decide which
//! functions to review first.
//!
//! - `config`: labels and options, with label map resolution
//! - `classify`: the edge bucket priority table
//! - `stats`: per-function edge statistics
//! - `rank`: the composite ranking key
//! - `report`: text and JSON rendering

mod classify;
mod config;
mod rank;
mod report;
mod stats;

pub use classify::{EdgeClass, EdgeClassifier};
pub use config::{
    parse_label_list, TriageConfig, TriageLabels, DEFAULT_ASSET_TYPE, DEFAULT_CALL_EDGES,
    DEFAULT_FUNC_TYPE, DEFAULT_LIMIT, DEFAULT_READS_EDGE, DEFAULT_ROLE_EDGE, DEFAULT_VALUE_EDGES,
    DEFAULT_WRITES_EDGE,
};
pub use rank::{rank, RankKey, RankedFunction};
pub use report::{render_entry, render_json, render_report};
pub use stats::{collect_stats, FuncStats};

use codegraph_graph::Graph;

/// Run triage over a graph.
///
/// Labels in `config` are used as given; resolve them through the label map
/// first (see [`TriageLabels::resolved_with`]).
pub fn triage(graph: &Graph, config: &TriageConfig) -> Vec<RankedFunction> {
    let stats = collect_stats(graph, &config.labels);
    rank(stats, config)
}
