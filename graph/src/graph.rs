//! The Graph - parsed nodes and edges of one codegraph.

use codegraph_core::{Edge, NodeId};
use std::collections::BTreeSet;

use crate::index::{OutgoingIndex, TypeIndex};

/// A parsed codegraph. Immutable after construction.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: BTreeSet<NodeId>,
    edges: Vec<Edge>,
    type_index: TypeIndex,
    outgoing: OutgoingIndex,
}

impl Graph {
    /// Build a graph and its indexes.
    pub fn new(nodes: BTreeSet<NodeId>, edges: Vec<Edge>) -> Self {
        let mut type_index = TypeIndex::new();
        for node in &nodes {
            type_index.insert(node.clone());
        }
        let outgoing = OutgoingIndex::build(&edges);
        log::debug!("graph: {} nodes, {} edges", nodes.len(), edges.len());
        Self {
            nodes,
            edges,
            type_index,
            outgoing,
        }
    }

    // ==================== Node Operations ====================

    /// Whether an identifier was declared as a node.
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    /// All nodes in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    /// Nodes carrying the given type tag, in identifier order.
    pub fn nodes_of_type<'a>(&'a self, type_name: &str) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.type_index.get(type_name)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ==================== Edge Operations ====================

    /// All edges in file order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges leaving `src`, in file order.
    pub fn outgoing<'a>(&'a self, src: &str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.outgoing
            .get(src)
            .iter()
            .map(move |&pos| &self.edges[pos])
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
