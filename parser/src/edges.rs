//! Edges document parsing.
//!
//! Each edge bullet reads `EDGE_TYPE | SRC -> DST | attrs...`.

use codegraph_core::Edge;

use crate::bullet::{bullets, trim};

const FIELD_SEPARATOR: char = '|';
const LINK_ARROW: &str = "->";

/// Parse the edges document into edges in file order.
///
/// Bullets without a `|`, with a link field lacking `->`, or with an empty
/// endpoint are skipped.
pub fn parse_edges(text: &str) -> Vec<Edge> {
    bullets(text)
        .filter_map(|(line_no, token)| {
            let edge = parse_edge(token, line_no);
            if edge.is_none() {
                log::trace!("edges:{line_no}: skipping malformed bullet {token:?}");
            }
            edge
        })
        .collect()
}

fn parse_edge(token: &str, line_no: usize) -> Option<Edge> {
    let mut fields = token.split(FIELD_SEPARATOR).map(trim);
    let edge_type = fields.next()?;
    let link = fields.next()?;
    let (src, dst) = link.split_once(LINK_ARROW)?;
    let (src, dst) = (trim(src), trim(dst));
    if src.is_empty() || dst.is_empty() {
        return None;
    }
    let attrs = fields.map(str::to_string).collect();
    Some(Edge::new(edge_type, src, dst, line_no).with_attrs(attrs))
}
