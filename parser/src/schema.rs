//! Schema document parsing.

use codegraph_registry::{Schema, SchemaBuilder};

use crate::bullet::{bullet, lines};
use crate::section::Section;

/// Parse the `## Node Types` and `## Edge Types` sections of a schema document.
///
/// Missing sections yield empty label sets.
pub fn parse_schema(text: &str) -> Schema {
    let mut builder = SchemaBuilder::new();
    let mut section = Section::None;

    for line in lines(text) {
        if let Some(next) = Section::from_header(line) {
            section = next;
            continue;
        }
        let Some(label) = bullet(line) else {
            continue;
        };
        match section {
            Section::NodeTypes => {
                builder.add_node_type(label);
            }
            Section::EdgeTypes => {
                builder.add_edge_type(label);
            }
            Section::LabelMap | Section::None => {}
        }
    }

    let schema = builder.build();
    if schema.is_empty() {
        log::debug!("schema: no node or edge types declared");
    } else {
        log::debug!(
            "schema: {} node types, {} edge types",
            schema.node_type_count(),
            schema.edge_type_count()
        );
        log::trace!(
            "schema: node types {:?}, edge types {:?}",
            schema.node_types().collect::<Vec<_>>(),
            schema.edge_types().collect::<Vec<_>>()
        );
    }
    schema
}
