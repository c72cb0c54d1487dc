//! Nodes document parsing.

use codegraph_core::NodeId;
use std::collections::BTreeSet;

use crate::bullet::bullets;

const URL_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Parse the nodes document into a set of node identifiers.
///
/// Every bullet is a candidate. URLs and candidates without a type separator
/// are skipped. Duplicates collapse into one node.
pub fn parse_nodes(text: &str) -> BTreeSet<NodeId> {
    let mut nodes = BTreeSet::new();
    for (line_no, token) in bullets(text) {
        if URL_PREFIXES.iter().any(|prefix| token.starts_with(prefix)) {
            log::trace!("nodes:{line_no}: skipping url {token}");
            continue;
        }
        match NodeId::parse(token) {
            Some(id) => {
                nodes.insert(id);
            }
            None => log::trace!("nodes:{line_no}: skipping untyped bullet {token:?}"),
        }
    }
    nodes
}
