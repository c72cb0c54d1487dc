//! Edge classification.
//!
//! Every outgoing edge of a function lands in at most one bucket. Buckets are
//! tried in a fixed priority order: value, call, reads, writes, role.

use std::collections::BTreeSet;

use crate::config::TriageLabels;

/// The bucket an edge is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    Value,
    Call,
    Reads,
    Writes,
    Role,
}

/// Which edge types select a bucket.
#[derive(Debug, Clone)]
enum Selector {
    AnyOf(BTreeSet<String>),
    Exactly(String),
}

impl Selector {
    fn matches(&self, edge_type: &str) -> bool {
        match self {
            Selector::AnyOf(labels) => labels.contains(edge_type),
            Selector::Exactly(label) => label == edge_type,
        }
    }
}

/// Ordered priority table mapping edge types to buckets.
#[derive(Debug, Clone)]
pub struct EdgeClassifier {
    table: Vec<(EdgeClass, Selector)>,
}

impl EdgeClassifier {
    pub fn new(labels: &TriageLabels) -> Self {
        Self {
            table: vec![
                (EdgeClass::Value, Selector::AnyOf(labels.value_edges.clone())),
                (EdgeClass::Call, Selector::AnyOf(labels.call_edges.clone())),
                (EdgeClass::Reads, Selector::Exactly(labels.reads_edge.clone())),
                (EdgeClass::Writes, Selector::Exactly(labels.writes_edge.clone())),
                (EdgeClass::Role, Selector::Exactly(labels.role_edge.clone())),
            ],
        }
    }

    /// First bucket whose selector matches, if any.
    pub fn classify(&self, edge_type: &str) -> Option<EdgeClass> {
        self.table
            .iter()
            .find(|(_, selector)| selector.matches(edge_type))
            .map(|(class, _)| *class)
    }
}
