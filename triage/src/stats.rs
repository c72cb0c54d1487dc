//! Per-function edge statistics.

use codegraph_core::{is_typed, Edge, NodeId};
use codegraph_graph::Graph;
use std::collections::{BTreeMap, BTreeSet};

use crate::classify::{EdgeClass, EdgeClassifier};
use crate::config::TriageLabels;

/// Statistics accumulated over the outgoing edges of one function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncStats {
    pub value_edges: usize,
    pub call_edges: usize,
    pub reads: usize,
    pub writes: usize,
    /// Roles required, deduplicated.
    pub roles: BTreeSet<String>,
    /// Asset nodes touched by value edges, deduplicated.
    pub assets: BTreeSet<String>,
}

impl FuncStats {
    /// Count one classified edge.
    fn record(&mut self, class: EdgeClass, edge: &Edge, asset_type: &str) {
        match class {
            EdgeClass::Value => {
                self.value_edges += 1;
                if is_typed(&edge.dst, asset_type) {
                    self.assets.insert(edge.dst.clone());
                }
            }
            EdgeClass::Call => self.call_edges += 1,
            EdgeClass::Reads => self.reads += 1,
            EdgeClass::Writes => self.writes += 1,
            EdgeClass::Role => {
                self.roles.insert(edge.dst.clone());
            }
        }
    }

    /// A function is permissionless when it requires no role.
    pub fn is_permissionless(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Collect statistics for every node typed as a function.
///
/// Functions without any outgoing edge still get (zeroed) statistics.
pub fn collect_stats(graph: &Graph, labels: &TriageLabels) -> BTreeMap<NodeId, FuncStats> {
    let classifier = EdgeClassifier::new(labels);
    let mut by_func = BTreeMap::new();

    for func in graph.nodes_of_type(&labels.func_type) {
        let mut stats = FuncStats::default();
        for edge in graph.outgoing(func.as_str()) {
            if let Some(class) = classifier.classify(&edge.edge_type) {
                stats.record(class, edge, &labels.asset_type);
            }
        }
        by_func.insert(func.clone(), stats);
    }

    log::debug!(
        "triage: {} {} nodes considered",
        by_func.len(),
        labels.func_type
    );
    by_func
}
