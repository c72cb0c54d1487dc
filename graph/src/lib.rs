//! Codegraph Graph
//!
//! In-memory view of one parsed codegraph: the node set, the edges in file
//! order, and lookup indexes built once at construction.

mod graph;
mod index;

pub use graph::Graph;
pub use index::{OutgoingIndex, TypeIndex};
