//! Validation outcome.

use codegraph_graph::Graph;
use codegraph_registry::Schema;
use serde::Serialize;

use crate::checker::SchemaChecker;
use crate::violation::Violations;

/// Counts reported on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub nodes: usize,
    pub edges: usize,
}

/// Result of validating a graph: either a summary or every violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationReport {
    Ok { summary: Summary },
    Fail { violations: Violations },
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

/// Validate a graph against a schema.
///
/// Pure function of its inputs; every call re-derives everything.
pub fn validate(schema: &Schema, graph: &Graph) -> ValidationReport {
    let violations = SchemaChecker::new(schema, graph).check_all();
    if violations.is_empty() {
        ValidationReport::Ok {
            summary: Summary {
                nodes: graph.node_count(),
                edges: graph.edge_count(),
            },
        }
    } else {
        ValidationReport::Fail { violations }
    }
}
