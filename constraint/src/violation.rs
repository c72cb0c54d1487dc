//! Schema violation types.

use serde::Serialize;
use std::path::Path;

/// What a violation is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// A node's type tag is not a declared node type.
    NodeTypeNotInSchema { node_type: String, node: String },
    /// An edge's type is not a declared edge type.
    EdgeTypeNotInSchema { edge_type: String },
    /// An edge's source is not a declared node.
    MissingSrcNode { src: String },
    /// An edge's destination is not a declared node.
    MissingDstNode { dst: String },
}

/// A schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    #[serde(flatten)]
    pub kind: ViolationKind,
    /// Line of the offending edge in the edges document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_no: Option<usize>,
}

impl Violation {
    pub fn node_type(node_type: impl Into<String>, node: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::NodeTypeNotInSchema {
                node_type: node_type.into(),
                node: node.into(),
            },
            line_no: None,
        }
    }

    pub fn edge_type(edge_type: impl Into<String>, line_no: usize) -> Self {
        Self {
            kind: ViolationKind::EdgeTypeNotInSchema {
                edge_type: edge_type.into(),
            },
            line_no: Some(line_no),
        }
    }

    pub fn missing_src(src: impl Into<String>, line_no: usize) -> Self {
        Self {
            kind: ViolationKind::MissingSrcNode { src: src.into() },
            line_no: Some(line_no),
        }
    }

    pub fn missing_dst(dst: impl Into<String>, line_no: usize) -> Self {
        Self {
            kind: ViolationKind::MissingDstNode { dst: dst.into() },
            line_no: Some(line_no),
        }
    }

    /// Human-readable message; edge violations are prefixed with
    /// `{edges_path}:{line}: `.
    pub fn render(&self, edges_path: &Path) -> String {
        let location = self
            .line_no
            .map(|line| format!("{}:{}: ", edges_path.display(), line))
            .unwrap_or_default();
        let message = match &self.kind {
            ViolationKind::NodeTypeNotInSchema { node_type, node } => {
                format!("node type not in schema: {node_type} ({node})")
            }
            ViolationKind::EdgeTypeNotInSchema { edge_type } => {
                format!("edge type not in schema: {edge_type}")
            }
            ViolationKind::MissingSrcNode { src } => format!("missing src node: {src}"),
            ViolationKind::MissingDstNode { dst } => format!("missing dst node: {dst}"),
        };
        format!("{location}{message}")
    }
}

/// Collection of violations in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create a new empty violations collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Merge another violations collection, keeping order.
    pub fn merge(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }

    /// Render every violation, one message per entry.
    pub fn render(&self, edges_path: &Path) -> Vec<String> {
        self.violations
            .iter()
            .map(|v| v.render(edges_path))
            .collect()
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
