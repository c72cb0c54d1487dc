//! Fixed file layout of a codegraph directory.

use std::path::{Path, PathBuf};

/// Default codegraph directory, relative to the working directory.
pub const DEFAULT_DIR: &str = "codegraph";

pub const SCHEMA_FILE: &str = "00_schema.md";
pub const NODES_FILE: &str = "01_nodes.md";
pub const EDGES_FILE: &str = "02_edges.md";

/// Paths of the three documents inside a codegraph directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub schema: PathBuf,
    pub nodes: PathBuf,
    pub edges: PathBuf,
}

impl Layout {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            schema: dir.join(SCHEMA_FILE),
            nodes: dir.join(NODES_FILE),
            edges: dir.join(EDGES_FILE),
        }
    }
}
