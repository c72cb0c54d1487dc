//! Identity types for codegraph nodes.
//!
//! A node is identified by a `TYPE:NAME` string. Only the first colon is
//! significant, so `FUNC:Vault:withdraw` has type `FUNC` and name
//! `Vault:withdraw`.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Separator between the type tag and the name of a node identifier.
pub const TYPE_SEPARATOR: char = ':';

/// Identifier of a node, of the form `TYPE:NAME`.
///
/// Identity is the full string. The type tag is derived on demand and never
/// stored separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Parse an identifier, refusing strings without a type separator.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.contains(TYPE_SEPARATOR) {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// The type tag (substring before the first colon).
    pub fn type_name(&self) -> &str {
        type_of(&self.0).unwrap_or_default()
    }

    /// The name part (everything after the first colon).
    pub fn name(&self) -> &str {
        self.0
            .split_once(TYPE_SEPARATOR)
            .map(|(_, name)| name)
            .unwrap_or_default()
    }

    /// Whether this node carries the given type tag.
    pub fn has_type(&self, type_name: &str) -> bool {
        self.type_name() == type_name
    }

    /// Get the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Type tag of a raw identifier, if it has one.
///
/// Edge endpoints are kept as raw strings, so this works on `&str` as well.
pub fn type_of(raw: &str) -> Option<&str> {
    raw.split_once(TYPE_SEPARATOR).map(|(ty, _)| ty)
}

/// Whether a raw identifier carries the given type tag.
pub fn is_typed(raw: &str, type_name: &str) -> bool {
    type_of(raw) == Some(type_name)
}
