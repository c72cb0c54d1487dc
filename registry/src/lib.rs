//! Codegraph Registry
//!
//! Immutable label lookups for one graph instance:
//! - [`Schema`]: the allowed node-type and edge-type labels
//! - [`LabelMap`]: translation from canonical tool labels to the labels this
//!   instance actually uses

mod label_map;
mod schema;

pub use label_map::LabelMap;
pub use schema::{Schema, SchemaBuilder};
