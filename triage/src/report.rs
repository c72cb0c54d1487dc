//! Triage report rendering.

use codegraph_core::messages::{NONE_MARKER, TRIAGE_EMPTY, TRIAGE_HEADER};

use crate::rank::RankedFunction;

fn join_or_none(labels: &[String]) -> String {
    if labels.is_empty() {
        NONE_MARKER.to_string()
    } else {
        labels.join(",")
    }
}

/// Render one entry.
///
/// Field order and the `none` marker are read by downstream tooling.
pub fn render_entry(entry: &RankedFunction) -> String {
    format!(
        "- {} | value_edges={} assets={} calls={} writes={} reads={} roles={}",
        entry.func,
        entry.value_edges,
        join_or_none(&entry.assets),
        entry.calls,
        entry.writes,
        entry.reads,
        join_or_none(&entry.roles),
    )
}

/// Render the whole report: the header, then one line per entry or the
/// empty-result line.
pub fn render_report(entries: &[RankedFunction]) -> Vec<String> {
    let mut lines = vec![TRIAGE_HEADER.to_string()];
    if entries.is_empty() {
        lines.push(TRIAGE_EMPTY.to_string());
    }
    lines.extend(entries.iter().map(render_entry));
    lines
}

/// Render the entries as a JSON array, in rank order.
pub fn render_json(entries: &[RankedFunction]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
