//! Entity structures for codegraph documents.
//!
//! Nodes are plain identifiers (see [`NodeId`](crate::NodeId)); edges carry
//! their type, endpoints and the line they were read from.

use serde::Serialize;

/// A typed, directed edge read from the edges document.
///
/// Endpoints are kept as raw strings: an edge may point at an identifier that
/// was never declared as a node, which is exactly what validation reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Edge type label.
    pub edge_type: String,
    /// Source node identifier.
    pub src: String,
    /// Destination node identifier.
    pub dst: String,
    /// 1-based line number in the source document.
    pub line_no: usize,
    /// Trailing free-form attribute fields, verbatim and unparsed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<String>,
}

impl Edge {
    /// Create a new edge with no attributes.
    pub fn new(
        edge_type: impl Into<String>,
        src: impl Into<String>,
        dst: impl Into<String>,
        line_no: usize,
    ) -> Self {
        Self {
            edge_type: edge_type.into(),
            src: src.into(),
            dst: dst.into(),
            line_no,
            attrs: Vec::new(),
        }
    }

    /// Attach the trailing attribute fields.
    pub fn with_attrs(mut self, attrs: Vec<String>) -> Self {
        self.attrs = attrs;
        self
    }
}
