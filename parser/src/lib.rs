//! Codegraph Parser
//!
//! This crate reads the three codegraph documents:
//! - Line tokenizing (bullet lines and section headers)
//! - Schema parsing (`## Node Types`, `## Edge Types`)
//! - Label map parsing (`## Label Map`)
//! - Node and edge parsing
//! - File loading with required/optional semantics
//!
//! Malformed lines are never errors: only well-formed bullets count as data.

pub mod bullet;
mod edges;
mod label_map;
pub mod layout;
mod load;
mod nodes;
mod schema;
pub mod section;

pub use edges::parse_edges;
pub use label_map::parse_label_map;
pub use load::{
    load_edges, load_graph_parts, load_label_map, load_nodes, load_schema,
    read_document, GraphParts,
};
pub use nodes::parse_nodes;
pub use schema::parse_schema;
