//! Section state for the schema document.
//!
//! Headers are lines starting with `## `. Recognized headers move the parser
//! into a section; any other header moves it back to [`Section::None`].

use crate::bullet::trim;

/// The section a schema line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    None,
    NodeTypes,
    EdgeTypes,
    LabelMap,
}

pub const NODE_TYPES_HEADER: &str = "## Node Types";
pub const EDGE_TYPES_HEADER: &str = "## Edge Types";

/// Accepted label map titles, compared lower-cased.
const LABEL_MAP_TITLES: [&str; 4] = ["label map", "label mapping", "label-map", "label-mapping"];

/// Returns the header title if the line is a `## ` header.
pub fn header(line: &str) -> Option<&str> {
    trim(line).strip_prefix("## ")
}

impl Section {
    /// Section entered by a header line, or `None` if the line is no header.
    ///
    /// `## Node Types` and `## Edge Types` match exactly (after trimming the
    /// line). Label map titles match case-insensitively.
    pub fn from_header(line: &str) -> Option<Self> {
        let title = header(line)?;
        let trimmed = trim(line);
        let section = if trimmed == NODE_TYPES_HEADER {
            Section::NodeTypes
        } else if trimmed == EDGE_TYPES_HEADER {
            Section::EdgeTypes
        } else if is_label_map_title(title) {
            Section::LabelMap
        } else {
            Section::None
        };
        Some(section)
    }

    /// Next state after reading `line`.
    pub fn advance(self, line: &str) -> Self {
        Self::from_header(line).unwrap_or(self)
    }
}

fn is_label_map_title(title: &str) -> bool {
    let title = trim(title).to_lowercase();
    LABEL_MAP_TITLES.contains(&title.as_str())
}
