//! Schema conformance checking.

use codegraph_core::Edge;
use codegraph_graph::Graph;
use codegraph_registry::Schema;

use crate::violation::{Violation, Violations};

/// Checks a graph against a schema.
pub struct SchemaChecker<'s, 'g> {
    schema: &'s Schema,
    graph: &'g Graph,
}

impl<'s, 'g> SchemaChecker<'s, 'g> {
    pub fn new(schema: &'s Schema, graph: &'g Graph) -> Self {
        Self { schema, graph }
    }

    /// Check node types, in identifier order.
    pub fn check_nodes(&self) -> Violations {
        let mut violations = Violations::new();
        for node in self.graph.nodes() {
            if !self.schema.has_node_type(node.type_name()) {
                violations.push(Violation::node_type(node.type_name(), node.as_str()));
            }
        }
        violations
    }

    /// Check edges in file order. Each edge is checked for its type, its
    /// source and its destination independently.
    pub fn check_edges(&self) -> Violations {
        let mut violations = Violations::new();
        for edge in self.graph.edges() {
            self.check_edge(edge, &mut violations);
        }
        violations
    }

    fn check_edge(&self, edge: &Edge, violations: &mut Violations) {
        if !self.schema.has_edge_type(&edge.edge_type) {
            violations.push(Violation::edge_type(&edge.edge_type, edge.line_no));
        }
        if !self.graph.contains_node(&edge.src) {
            violations.push(Violation::missing_src(&edge.src, edge.line_no));
        }
        if !self.graph.contains_node(&edge.dst) {
            violations.push(Violation::missing_dst(&edge.dst, edge.line_no));
        }
    }

    /// Check everything: node violations first, then edge violations.
    pub fn check_all(&self) -> Violations {
        let mut violations = self.check_nodes();
        violations.merge(self.check_edges());
        log::debug!("schema check: {} violations", violations.len());
        violations
    }
}
