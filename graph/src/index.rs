//! Indexes for graph lookups.

use codegraph_core::{Edge, NodeId};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Type index: type tag -> set of nodes.
#[derive(Debug, Default)]
pub struct TypeIndex {
    index: BTreeMap<String, BTreeSet<NodeId>>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: NodeId) {
        self.index
            .entry(node.type_name().to_string())
            .or_default()
            .insert(node);
    }

    /// Nodes of the given type in identifier order.
    pub fn get<'a>(&'a self, type_name: &str) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.index
            .get(type_name)
            .into_iter()
            .flat_map(|set| set.iter())
    }
}

/// Outgoing index: source identifier -> positions of its edges in file order.
#[derive(Debug, Default)]
pub struct OutgoingIndex {
    index: HashMap<String, Vec<usize>>,
}

impl OutgoingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(edges: &[Edge]) -> Self {
        let mut index = Self::new();
        for (pos, edge) in edges.iter().enumerate() {
            index.insert(&edge.src, pos);
        }
        index
    }

    pub fn insert(&mut self, src: &str, pos: usize) {
        self.index.entry(src.to_string()).or_default().push(pos);
    }

    /// Edge positions leaving `src`, ascending.
    pub fn get(&self, src: &str) -> &[usize] {
        self.index.get(src).map(Vec::as_slice).unwrap_or_default()
    }
}
