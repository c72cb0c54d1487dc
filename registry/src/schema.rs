//! The Schema - immutable label lookup.

use std::collections::BTreeSet;

/// Allowed node-type and edge-type labels of a graph instance.
///
/// Only membership matters; declaration order is not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    node_types: BTreeSet<String>,
    edge_types: BTreeSet<String>,
}

impl Schema {
    /// Create an empty schema. Nothing validates against it.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    // ==================== Lookups ====================

    /// Whether a node type is declared.
    pub fn has_node_type(&self, name: &str) -> bool {
        self.node_types.contains(name)
    }

    /// Whether an edge type is declared.
    pub fn has_edge_type(&self, name: &str) -> bool {
        self.edge_types.contains(name)
    }

    pub fn node_types(&self) -> impl Iterator<Item = &str> {
        self.node_types.iter().map(String::as_str)
    }

    pub fn edge_types(&self) -> impl Iterator<Item = &str> {
        self.edge_types.iter().map(String::as_str)
    }

    pub fn node_type_count(&self) -> usize {
        self.node_types.len()
    }

    pub fn edge_type_count(&self) -> usize {
        self.edge_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_types.is_empty() && self.edge_types.is_empty()
    }
}

/// Builder for constructing an immutable [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    node_types: BTreeSet<String>,
    edge_types: BTreeSet<String>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node type. Redeclaring is a no-op.
    pub fn add_node_type(&mut self, name: impl Into<String>) -> &mut Self {
        self.node_types.insert(name.into());
        self
    }

    /// Declare an edge type. Redeclaring is a no-op.
    pub fn add_edge_type(&mut self, name: impl Into<String>) -> &mut Self {
        self.edge_types.insert(name.into());
        self
    }

    pub fn node_type(mut self, name: impl Into<String>) -> Self {
        self.add_node_type(name);
        self
    }

    pub fn edge_type(mut self, name: impl Into<String>) -> Self {
        self.add_edge_type(name);
        self
    }

    pub fn build(self) -> Schema {
        log::debug!(
            "schema built: {} node types, {} edge types",
            self.node_types.len(),
            self.edge_types.len()
        );
        Schema {
            node_types: self.node_types,
            edge_types: self.edge_types,
        }
    }
}
