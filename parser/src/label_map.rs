//! Label map parsing.
//!
//! Bullets in a `## Label Map` section have the form `CANONICAL -> ACTUAL`,
//! `CANONICAL = ACTUAL` or `CANONICAL: ACTUAL`.

use codegraph_registry::LabelMap;

use crate::bullet::{bullet, lines, trim};
use crate::section::Section;

/// Separators in priority order. The first one present in a bullet is used.
const SEPARATORS: [&str; 3] = ["->", "=", ":"];

/// Parse the label map section of a schema document.
///
/// Later bullets with the same key overwrite earlier ones. Without a label
/// map section the result is empty.
pub fn parse_label_map(text: &str) -> LabelMap {
    let mut map = LabelMap::new();
    let mut section = Section::None;

    for line in lines(text) {
        section = section.advance(line);
        if section != Section::LabelMap {
            continue;
        }
        let Some(token) = bullet(line) else {
            continue;
        };
        match split_mapping(token) {
            Some((canonical, actual)) => map.insert(canonical, actual),
            None => log::trace!("label map: ignoring bullet {token:?}"),
        }
    }

    log::debug!("label map: {} entries", map.len());
    map
}

/// Split a bullet on its highest-priority separator.
///
/// Returns `None` when no separator is present or either side is empty. A
/// lower-priority separator is never retried once a higher one was found.
fn split_mapping(token: &str) -> Option<(&str, &str)> {
    let sep = SEPARATORS.iter().find(|sep| token.contains(**sep))?;
    let (canonical, actual) = token.split_once(sep)?;
    let (canonical, actual) = (trim(canonical), trim(actual));
    if canonical.is_empty() || actual.is_empty() {
        None
    } else {
        Some((canonical, actual))
    }
}
