//! Canonical-to-actual label translation.

use std::collections::BTreeMap;

/// Maps canonical labels (the tool defaults, e.g. `WRITES`) to the labels a
/// particular graph instance uses (e.g. `MOD_STORAGE`).
///
/// Keys are unique; inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    entries: BTreeMap<String, String>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping, replacing any earlier one for the same key.
    pub fn insert(&mut self, canonical: impl Into<String>, actual: impl Into<String>) {
        let canonical = canonical.into();
        let actual = actual.into();
        if let Some(previous) = self.entries.insert(canonical.clone(), actual.clone()) {
            log::debug!("label map: {canonical} remapped from {previous} to {actual}");
        }
    }

    /// Translate a label, returning it unchanged when it has no mapping.
    pub fn resolve<'a>(&'a self, label: &'a str) -> &'a str {
        self.entries.get(label).map(String::as_str).unwrap_or(label)
    }

    pub fn get(&self, canonical: &str) -> Option<&str> {
        self.entries.get(canonical).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
