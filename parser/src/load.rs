//! Loading codegraph documents from disk.
//!
//! Documents are read fully into memory before parsing. Required documents
//! fail with [`CodegraphError::MissingFile`]; optional ones degrade to empty
//! values.

use codegraph_core::{CodegraphError, CodegraphResult, Edge, NodeId};
use codegraph_registry::{LabelMap, Schema};
use std::collections::BTreeSet;
use std::path::Path;

use crate::layout::Layout;
use crate::{parse_edges, parse_label_map, parse_nodes, parse_schema};

/// Read a whole document.
pub fn read_document(path: &Path) -> CodegraphResult<String> {
    std::fs::read_to_string(path).map_err(|e| CodegraphError::from_io(path, e))
}

/// Read an optional document, treating a missing file as absent.
fn read_optional(path: &Path) -> CodegraphResult<Option<String>> {
    match read_document(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.is_missing_file() => {
            log::debug!("optional document {} not found", path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Load a schema document. A missing file is an error.
pub fn load_schema(path: &Path) -> CodegraphResult<Schema> {
    read_document(path).map(|text| parse_schema(&text))
}

/// Load the label map from a schema document. A missing file yields an
/// empty map.
pub fn load_label_map(path: &Path) -> CodegraphResult<LabelMap> {
    Ok(read_optional(path)?
        .map(|text| parse_label_map(&text))
        .unwrap_or_default())
}

/// Load a nodes document. A missing file is an error.
pub fn load_nodes(path: &Path) -> CodegraphResult<BTreeSet<NodeId>> {
    let nodes = parse_nodes(&read_document(path)?);
    log::debug!("{}: {} nodes", path.display(), nodes.len());
    Ok(nodes)
}

/// Load an edges document. A missing file is an error.
pub fn load_edges(path: &Path) -> CodegraphResult<Vec<Edge>> {
    let edges = parse_edges(&read_document(path)?);
    log::debug!("{}: {} edges", path.display(), edges.len());
    Ok(edges)
}

/// Nodes and edges of a codegraph directory, as parsed.
#[derive(Debug, Clone)]
pub struct GraphParts {
    pub layout: Layout,
    pub nodes: BTreeSet<NodeId>,
    pub edges: Vec<Edge>,
}

/// Load the nodes and edges documents of a codegraph directory.
pub fn load_graph_parts(dir: &Path) -> CodegraphResult<GraphParts> {
    let layout = Layout::new(dir);
    let nodes = load_nodes(&layout.nodes)?;
    let edges = load_edges(&layout.edges)?;
    Ok(GraphParts {
        layout,
        nodes,
        edges,
    })
}
